use serde::Serialize;
use tauri::State;
use tracing::info;

use super::keychain::{read_key, FIREBASE_SERVICE, GEMINI_SERVICE};
use super::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub gemini_api_key_set: bool,
    pub firebase_api_key_set: bool,
    pub data_dir_accessible: bool,
    pub data_dir_path: Option<String>,
    pub signed_in: bool,
}

#[tauri::command]
pub fn run_health_check(state: State<'_, AppState>) -> Result<HealthReport, String> {
    info!("Running health check");

    let key_set = |service: &str| matches!(read_key(service), Ok(Some(k)) if !k.trim().is_empty());
    let gemini_api_key_set = key_set(GEMINI_SERVICE);
    let firebase_api_key_set = key_set(FIREBASE_SERVICE);

    let data_dir = state.db_path().parent().map(|p| p.to_path_buf());
    let data_dir_accessible = data_dir
        .as_ref()
        .map(|d| std::fs::create_dir_all(d).is_ok() && d.is_dir())
        .unwrap_or(false);

    info!(
        "Gemini key set: {}, Firebase key set: {}, data dir accessible: {}",
        gemini_api_key_set, firebase_api_key_set, data_dir_accessible
    );

    Ok(HealthReport {
        gemini_api_key_set,
        firebase_api_key_set,
        data_dir_accessible,
        data_dir_path: data_dir.map(|d| d.to_string_lossy().to_string()),
        signed_in: state.session().is_some(),
    })
}
