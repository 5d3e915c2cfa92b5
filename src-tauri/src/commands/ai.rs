//! Tauri commands for photo analysis and the nutrition assistant.

use base64::Engine;
use serde::Deserialize;
use tauri::{AppHandle, State};
use tracing::info;

use super::diet::gemini_client;
use super::state::AppState;
use crate::ai::{self, MealAnalysis};
use crate::error::NutriTrackError;

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRequest {
    /// Raw image bytes, base64 encoded by the frontend.
    pub image_base64: String,
    pub mime_type: String,
}

/// Estimate the nutrition of a photographed meal.
///
/// Signed-in users get their saved dietary preferences and calorie goal
/// folded into the prompt.
#[tauri::command]
pub async fn analyze_meal_photo(
    app: AppHandle,
    state: State<'_, AppState>,
    request: PhotoRequest,
) -> Result<MealAnalysis, String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(request.image_base64.trim())
        .map_err(|e| NutriTrackError::validation(format!("Invalid image data: {}", e)))?;
    let client = gemini_client(&app)?;

    let (preferences, goal) = match state.session() {
        Some(session) => state
            .with_store(move |store| store.get_document(&session.user_id))
            .await?
            .map(|doc| (doc.dietary_prefs, doc.calorie_goal))
            .unwrap_or_default(),
        None => (None, None),
    };

    info!("Analyzing {} byte meal photo ({})", bytes.len(), request.mime_type);
    let analysis = ai::analyze_meal_photo(
        &client,
        &bytes,
        &request.mime_type,
        preferences.as_deref(),
        goal,
    )
    .await?;
    info!("Photo analysis: {} ({} kcal)", analysis.description, analysis.calories);
    Ok(analysis)
}

#[tauri::command]
pub async fn send_chat_message(app: AppHandle, message: String) -> Result<String, String> {
    if message.trim().is_empty() {
        return Err(NutriTrackError::validation("Please enter a question for the coach.").into());
    }
    let client = gemini_client(&app)?;
    Ok(ai::ask_assistant(&client, &message).await?)
}
