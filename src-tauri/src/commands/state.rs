//! Managed state shared by the command handlers.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::auth::Session;
use crate::error::{NutriTrackError, Result};
use crate::store::UserDocumentStore;

pub struct AppState {
    session: Mutex<Option<Session>>,
    db_path: PathBuf,
}

impl AppState {
    pub fn new(db_path: PathBuf, session: Option<Session>) -> Self {
        Self {
            session: Mutex::new(session),
            db_path,
        }
    }

    pub fn db_path(&self) -> &PathBuf {
        &self.db_path
    }

    pub fn session(&self) -> Option<Session> {
        self.session.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn set_session(&self, session: Option<Session>) {
        if let Ok(mut guard) = self.session.lock() {
            *guard = session;
        }
    }

    /// The signed-in user, or `NotSignedIn`.
    pub fn require_session(&self) -> Result<Session> {
        self.session().ok_or(NutriTrackError::NotSignedIn)
    }

    /// Run blocking store work off the async runtime.
    pub async fn with_store<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&UserDocumentStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let store = UserDocumentStore::new(&path)?;
            work(&store)
        })
        .await
        .map_err(|e| NutriTrackError::Store(format!("Store task failed: {}", e)))?
    }
}
