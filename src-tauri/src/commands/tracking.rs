//! Tauri commands for the meal log.

use chrono::Local;
use serde::Serialize;
use tauri::State;
use tracing::info;

use super::state::AppState;
use crate::store::UserDocument;
use crate::tracking::{self, MealInput, MealSuggestion, TrackingData};

/// Target used until the user saves a profile.
pub const DEFAULT_DAILY_TARGET: i64 = 2000;

#[derive(Debug, Clone, Serialize)]
pub struct TrackingView {
    pub data: TrackingData,
    pub daily_target: i64,
    pub remaining_calories: f64,
    pub health_summary: String,
}

impl TrackingView {
    pub fn from_document(doc: &UserDocument) -> Self {
        let target = daily_target(doc);
        let log = doc.meal_log();
        Self {
            data: doc.tracking_data(),
            daily_target: target,
            remaining_calories: log.remaining_calories(target),
            health_summary: log.health_summary(target),
        }
    }
}

pub fn daily_target(doc: &UserDocument) -> i64 {
    doc.calorie_goal
        .filter(|g| g.is_finite() && *g > 0.0)
        .map(|g| g.round() as i64)
        .unwrap_or(DEFAULT_DAILY_TARGET)
}

#[tauri::command]
pub async fn log_meal(state: State<'_, AppState>, meal: MealInput) -> Result<TrackingView, String> {
    let session = state.require_session()?;
    let doc = state
        .with_store(move |store| {
            store.modify(&session.user_id, |doc| {
                let mut log = doc.meal_log();
                log.log_meal(meal, Local::now())?;
                doc.apply_meal_log(log);
                Ok(())
            })
        })
        .await?;
    Ok(TrackingView::from_document(&doc))
}

/// The signed-in user's document, or an empty one before the first write.
pub async fn load_document(state: &AppState) -> crate::error::Result<UserDocument> {
    let session = state.require_session()?;
    let uid = session.user_id.clone();
    Ok(state
        .with_store(move |store| store.get_document(&session.user_id))
        .await?
        .unwrap_or_else(|| UserDocument::new(uid)))
}

#[tauri::command]
pub async fn get_tracking_data(state: State<'_, AppState>) -> Result<TrackingView, String> {
    let doc = load_document(&state).await?;
    Ok(TrackingView::from_document(&doc))
}

#[tauri::command]
pub fn search_meal_suggestions(query: String) -> Result<Vec<MealSuggestion>, String> {
    let results = tracking::search_suggestions(&query);
    info!("Meal search '{}' matched {} suggestions", query, results.len());
    Ok(results)
}

/// Link that opens a pre-filled post with today's progress.
#[tauri::command]
pub async fn share_progress_url(state: State<'_, AppState>) -> Result<String, String> {
    let doc = load_document(&state).await?;
    Ok(doc.meal_log().share_url(daily_target(&doc)))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_daily_target_defaults() {
        let mut doc = UserDocument::new("u1");
        assert_eq!(daily_target(&doc), 2000);
        doc.calorie_goal = Some(2006.6);
        assert_eq!(daily_target(&doc), 2007);
        doc.calorie_goal = Some(-1.0);
        assert_eq!(daily_target(&doc), 2000);
    }

    #[test]
    fn test_view_after_logging() {
        let mut doc = UserDocument::new("u1");
        doc.calorie_goal = Some(1800.0);
        let mut log = doc.meal_log();
        log.log_meal(
            MealInput {
                name: Some("Soup".into()),
                calories: Some(300.0),
                ..Default::default()
            },
            Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap(),
        )
        .unwrap();
        doc.apply_meal_log(log);

        let view = TrackingView::from_document(&doc);
        assert_eq!(view.daily_target, 1800);
        assert_eq!(view.remaining_calories, 1500.0);
        assert_eq!(view.data.points, 10);
        assert!(view.health_summary.contains("300 kcal out of 1800 kcal"));
    }
}
