use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Default calorie goal shown on each weekly bucket.
pub const DEFAULT_DAY_GOAL: f64 = 2000.0;

/// Where a logged meal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSource {
    #[default]
    Homemade,
    Restaurant,
    Scanned,
}

/// Meal form values before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealInput {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub source: Option<MealSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    pub name: String,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub source: MealSource,
    pub timestamp: DateTime<Utc>,
}

/// One bar of the weekly chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyDay {
    pub day: String,
    pub calories: f64,
    #[serde(default = "default_day_goal")]
    pub goal: f64,
}

fn default_day_goal() -> f64 {
    DEFAULT_DAY_GOAL
}

/// Short label used for a weekday bucket ("Mon" .. "Sun").
pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Seven empty buckets, Monday first.
pub fn default_week() -> Vec<WeeklyDay> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .map(|day| WeeklyDay {
        day: day_label(day).to_string(),
        calories: 0.0,
        goal: DEFAULT_DAY_GOAL,
    })
    .collect()
}

/// True when `week` has exactly the seven Mon..Sun buckets in order.
pub fn is_well_formed_week(week: &[WeeklyDay]) -> bool {
    week.len() == 7
        && week
            .iter()
            .zip(default_week())
            .all(|(actual, expected)| actual.day == expected.day)
}

/// A built-in meal the user can search for and log with one click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    pub name: String,
    #[serde(default)]
    pub source: MealSource,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

impl From<&MealSuggestion> for MealInput {
    fn from(meal: &MealSuggestion) -> Self {
        MealInput {
            name: Some(meal.name.clone()),
            calories: Some(meal.calories),
            protein: Some(meal.protein),
            carbs: Some(meal.carbs),
            fat: Some(meal.fat),
            source: Some(meal.source),
        }
    }
}

/// Everything the tracking view needs in one read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingData {
    pub logged_meals: Vec<LoggedMeal>,
    pub calories_consumed: f64,
    pub points: u64,
    pub weekly_data: Vec<WeeklyDay>,
    pub profile: Option<crate::calculator::ProfileInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_week_is_monday_first() {
        let week = default_week();
        let labels: Vec<&str> = week.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert!(week.iter().all(|d| d.goal == 2000.0 && d.calories == 0.0));
        assert!(is_well_formed_week(&week));
    }

    #[test]
    fn test_short_week_is_not_well_formed() {
        let mut week = default_week();
        week.pop();
        assert!(!is_well_formed_week(&week));
    }

    #[test]
    fn test_weekly_day_goal_defaults_when_missing() {
        let day: WeeklyDay = serde_json::from_str(r#"{"day":"Fri","calories":120}"#).unwrap();
        assert_eq!(day.goal, 2000.0);
    }
}
