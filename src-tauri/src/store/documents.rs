use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Map, Value};
use tracing::info;

use super::types::UserDocument;
use crate::diet_plan::DietPlan;
use crate::error::{NutriTrackError, Result};
use crate::tracking::TrackingData;

pub const DATABASE_FILE: &str = "nutritrack.db";

/// SQLite store holding one JSON document per user id.
///
/// All operations are synchronous (rusqlite is blocking). Callers in async
/// contexts should use `tokio::task::spawn_blocking`. Updates are plain
/// read-modify-write: the last writer wins.
pub struct UserDocumentStore {
    conn: Connection,
}

impl UserDocumentStore {
    /// Create or open the database at `db_path`, creating parent directories.
    pub fn new(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| NutriTrackError::Store(format!("Failed to create data dir: {}", e)))?;
        }
        let conn = Connection::open(db_path)?;
        let store = Self::with_connection(conn)?;
        info!("Opened user document database at {:?}", db_path);
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS user_documents (
                uid TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    pub fn get_document(&self, uid: &str) -> Result<Option<UserDocument>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT data FROM user_documents WHERE uid = ?1",
                params![uid],
                |row| row.get(0),
            )
            .optional()?;

        Ok(raw.map(|data| {
            let value = serde_json::from_str(&data).unwrap_or_else(|e| {
                tracing::warn!("Stored document for {} is not valid JSON: {}", uid, e);
                Value::Null
            });
            UserDocument::from_value(uid, value)
        }))
    }

    /// Replace the whole document.
    pub fn set_document(&self, doc: &UserDocument) -> Result<()> {
        let data = serde_json::to_string(doc)
            .map_err(|e| NutriTrackError::Store(format!("Failed to serialize document: {}", e)))?;
        self.conn.execute(
            "INSERT INTO user_documents (uid, data, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(uid) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
            params![doc.uid, data],
        )?;
        Ok(())
    }

    /// Shallow-merge `patch` into the stored document's top-level fields.
    ///
    /// Fails when the document does not exist. The `uid` field is never
    /// overwritten.
    pub fn update_fields(&self, uid: &str, patch: Map<String, Value>) -> Result<UserDocument> {
        let current = self.get_document(uid)?.ok_or_else(|| {
            NutriTrackError::Store(format!("No document found for user {}", uid))
        })?;

        let mut value = serde_json::to_value(&current)
            .map_err(|e| NutriTrackError::Store(format!("Failed to serialize document: {}", e)))?;
        if let Value::Object(map) = &mut value {
            for (key, field) in patch {
                if key != "uid" {
                    map.insert(key, field);
                }
            }
        }

        let updated = UserDocument::from_value(uid, value);
        self.set_document(&updated)?;
        Ok(updated)
    }

    /// Load the document, apply `change`, write it back. Creates the document
    /// when absent.
    pub fn modify<F>(&self, uid: &str, change: F) -> Result<UserDocument>
    where
        F: FnOnce(&mut UserDocument) -> Result<()>,
    {
        let mut doc = self
            .get_document(uid)?
            .unwrap_or_else(|| UserDocument::new(uid));
        change(&mut doc)?;
        self.set_document(&doc)?;
        Ok(doc)
    }

    /// Append `plan`, also recording `dietary_prefs` when given, in a single
    /// write.
    pub fn add_diet_plan(
        &self,
        uid: &str,
        plan: &DietPlan,
        dietary_prefs: Option<&str>,
    ) -> Result<()> {
        let doc = self.modify(uid, |doc| {
            doc.diet_plans.push(plan.clone());
            if let Some(prefs) = dietary_prefs {
                doc.dietary_prefs = Some(prefs.to_string());
            }
            Ok(())
        })?;
        info!(
            "Saved diet plan '{}' for {} ({} total)",
            plan.plan_name,
            uid,
            doc.diet_plans.len()
        );
        Ok(())
    }

    pub fn list_diet_plans(&self, uid: &str) -> Result<Vec<DietPlan>> {
        Ok(self
            .get_document(uid)?
            .map(|doc| doc.diet_plans)
            .unwrap_or_default())
    }

    pub fn get_tracking_data(&self, uid: &str) -> Result<Option<TrackingData>> {
        Ok(self.get_document(uid)?.map(|doc| doc.tracking_data()))
    }
}
