//! Tauri commands for progress logging and badges.

use chrono::Local;
use tauri::State;

use super::state::AppState;
use super::tracking::load_document;
use crate::diet_plan::latest_plan;
use crate::progress::{ProgressInput, ProgressOutcome, ProgressOverview};

/// Record today's progress against the saved goal and the latest plan.
#[tauri::command]
pub async fn record_progress(
    state: State<'_, AppState>,
    input: ProgressInput,
) -> Result<ProgressOutcome, String> {
    let session = state.require_session()?;
    let today = Local::now().date_naive();

    let outcome = state
        .with_store(move |store| {
            let mut outcome = None;
            store.modify(&session.user_id, |doc| {
                let plan = latest_plan(&doc.diet_plans).cloned();
                let mut tracker = doc.progress_tracker();
                let recorded = tracker.record_progress(&input, doc.calorie_goal, plan.as_ref(), today)?;
                doc.apply_progress(tracker);
                outcome = Some(recorded);
                Ok(())
            })?;
            outcome.ok_or_else(|| crate::error::NutriTrackError::Store("progress was not recorded".into()))
        })
        .await?;

    tracing::info!(
        "Recorded progress: bmi {}, {} new badge(s)",
        outcome.entry.bmi,
        outcome.newly_unlocked.len()
    );
    Ok(outcome)
}

#[tauri::command]
pub async fn get_progress(state: State<'_, AppState>) -> Result<ProgressOverview, String> {
    let doc = load_document(&state).await?;
    let tracker = doc.progress_tracker();
    let today = Local::now().date_naive();
    Ok(ProgressOverview {
        weekly: tracker.weekly(today),
        badges: tracker.badges().to_vec(),
        entries: tracker.entries,
    })
}
