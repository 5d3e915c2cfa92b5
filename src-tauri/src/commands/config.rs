use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

pub const PREFERENCES_FILE: &str = "preferences.json";

/// Preference keys the UI may read and write.
pub const PREFERENCE_KEYS: [&str; 3] = ["theme", "ai_model", "language"];

/// Read a string preference, `None` when unset or unreadable.
pub fn read_preference(app: &AppHandle, key: &str) -> Option<String> {
    let store = match app.store(PREFERENCES_FILE) {
        Ok(store) => store,
        Err(e) => {
            warn!("Failed to open store: {}", e);
            return None;
        }
    };
    store
        .get(key)
        .and_then(|v| v.as_str().map(|s| s.to_string()))
        .filter(|s| !s.is_empty())
}

fn check_key(key: &str) -> Result<(), String> {
    if PREFERENCE_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(format!("Unknown preference '{}'", key))
    }
}

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    info!("Getting preference: {}", key);
    check_key(key)?;
    Ok(read_preference(&app, key))
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    info!("Setting preference: {} = {}", key, value);
    check_key(key)?;
    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.set(key, serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })
}
