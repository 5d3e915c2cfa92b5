pub mod ai;
pub mod auth;
pub mod calculator;
mod commands;
pub mod diet_plan;
pub mod error;
pub mod progress;
pub mod store;
pub mod tracking;

use std::path::PathBuf;

use anyhow::Context;

pub use error::{NutriTrackError, Result};
pub use store::{UserDocument, UserDocumentStore};

/// Where the document database lives: the app data dir, or the platform data
/// dir when Tauri cannot resolve one.
fn resolve_db_path(app: &tauri::App) -> anyhow::Result<PathBuf> {
    use tauri::Manager;
    let dir = match app.path().app_data_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("No app data dir ({}), falling back to platform data dir", e);
            dirs::data_dir()
                .context("Could not determine a data directory")?
                .join("nutritrack")
        }
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    Ok(dir.join(store::DATABASE_FILE))
}

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::keychain::set_api_key,
            commands::keychain::get_api_key,
            commands::keychain::delete_api_key,
            commands::config::get_preference,
            commands::config::set_preference,
            commands::health::run_health_check,
            commands::auth::signup,
            commands::auth::login,
            commands::auth::logout,
            commands::auth::current_session,
            commands::profile::calculate_goals,
            commands::profile::save_profile,
            commands::profile::get_profile,
            commands::tracking::log_meal,
            commands::tracking::get_tracking_data,
            commands::tracking::search_meal_suggestions,
            commands::tracking::share_progress_url,
            commands::progress::record_progress,
            commands::progress::get_progress,
            commands::diet::generate_diet_plan,
            commands::diet::list_diet_plans,
            commands::diet::get_grocery_list,
            commands::ai::analyze_meal_photo,
            commands::ai::send_chat_message,
        ])
        .setup(|app| {
            use tauri::Manager;
            let db_path = resolve_db_path(app)?;
            tracing::info!("Using document store at {}", db_path.display());

            let session = commands::auth::load_persisted_session(app.handle());
            if let Some(session) = &session {
                tracing::info!("Restored session for {}", session.email);
            }
            app.manage(commands::state::AppState::new(db_path, session));
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
