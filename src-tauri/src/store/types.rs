use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::calculator::ProfileInput;
use crate::diet_plan::DietPlan;
use crate::progress::{Badge, BadgeSet, ProgressEntry, ProgressTracker};
use crate::tracking::{default_week, is_well_formed_week, MealLog, TrackingData, WeeklyDay};

/// Everything stored for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    pub uid: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub profile: Option<ProfileInput>,
    pub logged_meals: Vec<crate::tracking::LoggedMeal>,
    pub calories_consumed: f64,
    pub points: u64,
    pub calories_burned: f64,
    pub weekly_data: Vec<WeeklyDay>,
    pub diet_plans: Vec<DietPlan>,
    pub progress_entries: Vec<ProgressEntry>,
    pub badges: Vec<Badge>,
    pub calorie_goal: Option<f64>,
    pub dietary_prefs: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl UserDocument {
    /// An empty document with zero counters and the default week.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            profile: None,
            logged_meals: Vec::new(),
            calories_consumed: 0.0,
            points: 0,
            calories_burned: 0.0,
            weekly_data: default_week(),
            diet_plans: Vec::new(),
            progress_entries: Vec::new(),
            badges: Vec::new(),
            calorie_goal: None,
            dietary_prefs: None,
            created_at: None,
        }
    }

    /// Rebuild a document from stored JSON.
    ///
    /// Each field is read on its own; a missing or malformed field falls back
    /// to its default instead of failing the whole document.
    pub fn from_value(uid: &str, value: Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            _ => {
                tracing::warn!("Stored document for {} is not an object", uid);
                return Self::new(uid);
            }
        };
        let defaults = Self::new(uid);

        let weekly_data: Vec<WeeklyDay> = field(&map, "weekly_data").unwrap_or_default();
        let weekly_data = if is_well_formed_week(&weekly_data) {
            weekly_data
        } else {
            defaults.weekly_data
        };

        // Unknown badge labels are dropped.
        let badges = field::<Vec<String>>(&map, "badges")
            .unwrap_or_default()
            .iter()
            .filter_map(|label| Badge::from_label(label))
            .collect::<Vec<_>>();

        Self {
            uid: uid.to_string(),
            name: field(&map, "name").unwrap_or_default(),
            phone: field(&map, "phone").unwrap_or_default(),
            email: field(&map, "email").unwrap_or_default(),
            profile: field(&map, "profile"),
            logged_meals: field(&map, "logged_meals").unwrap_or_default(),
            calories_consumed: field(&map, "calories_consumed").unwrap_or_default(),
            points: field(&map, "points").unwrap_or_default(),
            calories_burned: field(&map, "calories_burned").unwrap_or_default(),
            weekly_data,
            diet_plans: field(&map, "diet_plans").unwrap_or_default(),
            progress_entries: field(&map, "progress_entries").unwrap_or_default(),
            badges: BadgeSet::from_unlocked(badges).into_vec(),
            calorie_goal: field(&map, "calorie_goal"),
            dietary_prefs: field(&map, "dietary_prefs"),
            created_at: field(&map, "created_at"),
        }
    }

    pub fn meal_log(&self) -> MealLog {
        MealLog {
            logged_meals: self.logged_meals.clone(),
            calories_consumed: self.calories_consumed,
            points: self.points,
            weekly_data: self.weekly_data.clone(),
        }
    }

    pub fn apply_meal_log(&mut self, log: MealLog) {
        self.logged_meals = log.logged_meals;
        self.calories_consumed = log.calories_consumed;
        self.points = log.points;
        self.weekly_data = log.weekly_data;
    }

    pub fn progress_tracker(&self) -> ProgressTracker {
        ProgressTracker::new(
            self.progress_entries.clone(),
            BadgeSet::from_unlocked(self.badges.iter().copied()),
        )
    }

    pub fn apply_progress(&mut self, tracker: ProgressTracker) {
        self.progress_entries = tracker.entries;
        self.badges = tracker.badges.into_vec();
    }

    pub fn tracking_data(&self) -> TrackingData {
        TrackingData {
            logged_meals: self.logged_meals.clone(),
            calories_consumed: self.calories_consumed,
            points: self.points,
            weekly_data: self.weekly_data.clone(),
            profile: self.profile.clone(),
        }
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    let value = map.get(key)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Ignoring malformed '{}' field: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let doc = UserDocument::from_value("u1", json!({ "name": "Ada" }));
        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.points, 0);
        assert_eq!(doc.weekly_data, default_week());
        assert!(doc.diet_plans.is_empty());
        assert!(doc.profile.is_none());
    }

    #[test]
    fn test_malformed_fields_default() {
        let doc = UserDocument::from_value(
            "u1",
            json!({
                "points": "lots",
                "logged_meals": 12,
                "weekly_data": [{ "day": "Mon", "calories": 5 }],
                "calories_consumed": 320.5,
            }),
        );
        assert_eq!(doc.points, 0);
        assert!(doc.logged_meals.is_empty());
        assert_eq!(doc.weekly_data.len(), 7);
        assert_eq!(doc.calories_consumed, 320.5);
    }

    #[test]
    fn test_unknown_badges_dropped() {
        let doc = UserDocument::from_value(
            "u1",
            json!({ "badges": ["3 Days Meal Plan Streak", "Gold Star", "3 Days Meal Plan Streak"] }),
        );
        assert_eq!(doc.badges, vec![Badge::MealPlanStreak3]);
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut doc = UserDocument::new("u1");
        doc.calorie_goal = Some(2007.0);
        doc.badges.push(Badge::LoggingStreak5);
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(UserDocument::from_value("u1", value), doc);
    }

    #[test]
    fn test_non_object_document() {
        let doc = UserDocument::from_value("u1", json!([1, 2, 3]));
        assert_eq!(doc, UserDocument::new("u1"));
    }
}
