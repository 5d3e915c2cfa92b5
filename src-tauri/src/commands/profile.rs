//! Tauri commands for the user profile and calorie goal.

use serde::Serialize;
use serde_json::{Map, Value};
use tauri::State;
use tracing::info;

use super::state::AppState;
use crate::calculator::{self, GoalSummary, ProfileInput};
use crate::error::{NutriTrackError, Result as StoreResult};
use crate::store::{UserDocument, UserDocumentStore};

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub profile: Option<ProfileInput>,
    /// Present when the stored profile is complete enough to compute.
    pub summary: Option<GoalSummary>,
    pub calorie_goal: Option<f64>,
}

impl ProfileView {
    pub fn from_document(doc: Option<&UserDocument>) -> Self {
        let profile = doc.and_then(|d| d.profile.clone());
        let summary = profile
            .as_ref()
            .and_then(|p| calculator::compute_goals(p).ok());
        Self {
            profile,
            summary,
            calorie_goal: doc.and_then(|d| d.calorie_goal),
        }
    }
}

/// Patch `profile` and `calorie_goal` onto the user's document, leaving every
/// other field as stored. Creates the document when absent.
fn store_profile(
    store: &UserDocumentStore,
    uid: &str,
    profile: &ProfileInput,
    calorie_goal: f64,
) -> StoreResult<UserDocument> {
    if store.get_document(uid)?.is_none() {
        store.set_document(&UserDocument::new(uid))?;
    }
    let profile = serde_json::to_value(profile)
        .map_err(|e| NutriTrackError::Store(format!("Failed to serialize profile: {}", e)))?;
    let mut patch = Map::new();
    patch.insert("profile".into(), profile);
    patch.insert("calorie_goal".into(), Value::from(calorie_goal));
    store.update_fields(uid, patch)
}

/// Compute goals without saving anything.
#[tauri::command]
pub fn calculate_goals(input: ProfileInput) -> Result<GoalSummary, String> {
    Ok(calculator::compute_goals(&input)?)
}

/// Validate, compute and store the profile along with its calorie target.
#[tauri::command]
pub async fn save_profile(
    state: State<'_, AppState>,
    input: ProfileInput,
) -> Result<ProfileView, String> {
    let session = state.require_session()?;
    let profile = calculator::validate_profile(&input)?;
    let summary = calculator::summarize(&profile);
    let target = summary.daily_calorie_target as f64;
    let stored = ProfileInput::from(&profile);

    let doc = state
        .with_store(move |store| store_profile(store, &session.user_id, &stored, target))
        .await?;

    info!(
        "Saved profile for {} (target {} kcal)",
        doc.uid, summary.daily_calorie_target
    );
    Ok(ProfileView {
        profile: doc.profile,
        summary: Some(summary),
        calorie_goal: doc.calorie_goal,
    })
}

#[tauri::command]
pub async fn get_profile(state: State<'_, AppState>) -> Result<ProfileView, String> {
    let session = state.require_session()?;
    let doc = state
        .with_store(move |store| store.get_document(&session.user_id))
        .await?;
    Ok(ProfileView::from_document(doc.as_ref()))
}
