//! Sign-up, login and the persisted session.

use chrono::Utc;
use tauri::{AppHandle, State};
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use super::keychain::{require_key, FIREBASE_SERVICE};
use super::state::AppState;
use crate::auth::{self, FirebaseAuthClient, LoginRequest, Session, SignupRequest};
use crate::calculator::ProfileInput;
use crate::error::Result;
use crate::store::UserDocument;

pub const SESSION_FILE: &str = "session.json";
const SESSION_KEY: &str = "session";

fn auth_client() -> Result<FirebaseAuthClient> {
    let api_key = require_key(FIREBASE_SERVICE, "Firebase")?;
    FirebaseAuthClient::new(api_key)
}

/// Session saved by a previous run, if any.
pub fn load_persisted_session(app: &AppHandle) -> Option<Session> {
    let store = app.store(SESSION_FILE).ok()?;
    let value = store.get(SESSION_KEY)?;
    serde_json::from_value(value).ok()
}

fn persist_session(app: &AppHandle, session: Option<&Session>) {
    let store = match app.store(SESSION_FILE) {
        Ok(store) => store,
        Err(e) => {
            warn!("Failed to open session store: {}", e);
            return;
        }
    };
    match session {
        Some(session) => store.set(SESSION_KEY, serde_json::json!(session)),
        None => {
            store.delete(SESSION_KEY);
        }
    }
    if let Err(e) = store.save() {
        warn!("Failed to save session store: {}", e);
    }
}

/// The document written for a freshly created account.
pub fn new_user_document(session: &Session, request: &SignupRequest) -> UserDocument {
    let mut doc = UserDocument::new(session.user_id.clone());
    doc.name = request.name.trim().to_string();
    doc.phone = request.phone.trim().to_string();
    doc.email = session.email.clone();
    doc.profile = Some(ProfileInput {
        age: request.age,
        weight: request.weight,
        height: request.height,
        ..Default::default()
    });
    doc.created_at = Some(Utc::now());
    doc
}

#[tauri::command]
pub async fn signup(
    app: AppHandle,
    state: State<'_, AppState>,
    request: SignupRequest,
) -> std::result::Result<Session, String> {
    info!("Signing up {}", request.email);
    let client = auth_client()?;
    let session = auth::register(&client, &request).await?;

    let doc = new_user_document(&session, &request);
    if let Err(e) = state.with_store(move |store| store.set_document(&doc)).await {
        warn!(
            "Profile document creation failed for {}; continuing with auth only: {}",
            session.user_id, e
        );
    }

    state.set_session(Some(session.clone()));
    persist_session(&app, Some(&session));
    Ok(session)
}

#[tauri::command]
pub async fn login(
    app: AppHandle,
    state: State<'_, AppState>,
    request: LoginRequest,
) -> std::result::Result<Session, String> {
    info!("Logging in {}", request.email);
    let client = auth_client()?;
    let session = auth::login(&client, &request).await?;
    state.set_session(Some(session.clone()));
    persist_session(&app, Some(&session));
    Ok(session)
}

#[tauri::command]
pub fn logout(app: AppHandle, state: State<'_, AppState>) -> std::result::Result<(), String> {
    info!("Logging out");
    state.set_session(None);
    persist_session(&app, None);
    Ok(())
}

#[tauri::command]
pub fn current_session(state: State<'_, AppState>) -> std::result::Result<Option<Session>, String> {
    Ok(state.session())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_document() {
        let session = Session {
            token: "t".into(),
            user_id: "uid9".into(),
            email: "ada@example.com".into(),
        };
        let request = SignupRequest {
            name: " Ada ".into(),
            phone: "555".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            age: Some(30),
            weight: Some(60.0),
            height: None,
        };
        let doc = new_user_document(&session, &request);
        assert_eq!(doc.uid, "uid9");
        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.weekly_data.len(), 7);
        assert_eq!(doc.profile.as_ref().unwrap().age, Some(30));
        assert!(doc.profile.unwrap().height.is_none());
        assert!(doc.created_at.is_some());
    }
}
