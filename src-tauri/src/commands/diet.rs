//! Tauri commands for AI meal plans and the grocery list.

use chrono::Utc;
use tauri::{AppHandle, State};
use tracing::{info, warn};

use super::config::read_preference;
use super::keychain::{require_key, GEMINI_SERVICE};
use super::state::AppState;
use crate::ai::GeminiClient;
use crate::diet_plan::{self, DietPlan, GeneratedPlan, PlanRequest};
use crate::error::Result;

/// Gemini client for the stored key and the preferred model.
pub fn gemini_client(app: &AppHandle) -> Result<GeminiClient> {
    let api_key = require_key(GEMINI_SERVICE, "Gemini")?;
    let model = read_preference(app, "ai_model");
    GeminiClient::new(api_key, model.as_deref())
}

/// Generate a plan and save it to the user's document.
///
/// A failed save does not discard the plan: it is returned with a warning.
#[tauri::command]
pub async fn generate_diet_plan(
    app: AppHandle,
    state: State<'_, AppState>,
    request: PlanRequest,
) -> std::result::Result<GeneratedPlan, String> {
    let session = state.require_session()?;
    let client = gemini_client(&app)?;
    info!(
        "Generating meal plan with {} for '{}'",
        client.model(),
        request.dietary_preferences
    );

    let plan =
        diet_plan::generate_plan(&client, &request.dietary_preferences, request.calorie_goal, Utc::now())
            .await?;
    let grocery_list = diet_plan::grocery_list([&plan]);

    let warning = save_generated_plan(
        &state,
        session.user_id,
        &plan,
        request.dietary_preferences.trim().to_string(),
    )
    .await;

    Ok(GeneratedPlan {
        plan,
        grocery_list,
        warning,
    })
}

/// Append `plan` and record the preferences in one write.
///
/// Returns a warning for the user when the write fails; the plan itself is
/// kept by the caller either way.
async fn save_generated_plan(
    state: &AppState,
    uid: String,
    plan: &DietPlan,
    preferences: String,
) -> Option<String> {
    let to_save = plan.clone();
    let saved = state
        .with_store(move |store| store.add_diet_plan(&uid, &to_save, Some(&preferences)))
        .await;

    match saved {
        Ok(()) => None,
        Err(e) => {
            warn!("Meal plan generated but not saved: {}", e);
            Some(format!("Meal plan generated but could not be saved: {}", e.user_message()))
        }
    }
}

#[tauri::command]
pub async fn list_diet_plans(state: State<'_, AppState>) -> std::result::Result<Vec<DietPlan>, String> {
    let session = state.require_session()?;
    Ok(state
        .with_store(move |store| store.list_diet_plans(&session.user_id))
        .await?)
}

/// Ingredients across every saved plan, first occurrence wins.
#[tauri::command]
pub async fn get_grocery_list(state: State<'_, AppState>) -> std::result::Result<Vec<String>, String> {
    let session = state.require_session()?;
    let plans = state
        .with_store(move |store| store.list_diet_plans(&session.user_id))
        .await?;
    let items = diet_plan::grocery_list(&plans);
    info!("Grocery list: {} items from {} plans", items.len(), plans.len());
    Ok(items)
}
