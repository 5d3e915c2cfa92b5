use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::types::{day_label, default_week, is_well_formed_week, LoggedMeal, MealInput, WeeklyDay};
use crate::error::{NutriTrackError, Result};

/// Meals under this many kcal earn [`LOW_CALORIE_POINTS`].
pub const LOW_CALORIE_THRESHOLD: f64 = 500.0;
pub const LOW_CALORIE_POINTS: u64 = 10;

const SHARE_BASE_URL: &str = "https://x.com/intent/post?text=";

/// The running meal log of one user: meals, intake, points and weekly buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLog {
    pub logged_meals: Vec<LoggedMeal>,
    pub calories_consumed: f64,
    pub points: u64,
    pub weekly_data: Vec<WeeklyDay>,
}

impl Default for MealLog {
    fn default() -> Self {
        Self {
            logged_meals: Vec::new(),
            calories_consumed: 0.0,
            points: 0,
            weekly_data: default_week(),
        }
    }
}

impl MealLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a meal logged at `now`.
    ///
    /// The meal's calories go to the bucket of `now`'s weekday in `now`'s own
    /// time zone. Buckets accumulate across weeks; nothing resets them.
    pub fn log_meal<Tz: TimeZone>(&mut self, input: MealInput, now: DateTime<Tz>) -> Result<LoggedMeal> {
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| NutriTrackError::validation("Invalid meal data. Please enter a meal name."))?
            .to_string();

        let calories = match input.calories {
            Some(c) if c.is_finite() && c >= 0.0 => c,
            _ => {
                return Err(NutriTrackError::validation(
                    "Invalid meal data. Please enter the meal's calories.",
                ))
            }
        };
        let protein = macro_grams("protein", input.protein)?;
        let carbs = macro_grams("carbs", input.carbs)?;
        let fat = macro_grams("fat", input.fat)?;

        if !is_well_formed_week(&self.weekly_data) {
            tracing::warn!("Weekly buckets were malformed, resetting to an empty week");
            self.weekly_data = default_week();
        }

        let label = day_label(now.weekday());
        let meal = LoggedMeal {
            name,
            calories,
            protein,
            carbs,
            fat,
            source: input.source.unwrap_or_default(),
            timestamp: now.with_timezone(&Utc),
        };

        self.logged_meals.push(meal.clone());
        self.calories_consumed += calories;
        if calories < LOW_CALORIE_THRESHOLD {
            self.points += LOW_CALORIE_POINTS;
        }
        if let Some(bucket) = self.weekly_data.iter_mut().find(|d| d.day == label) {
            bucket.calories += calories;
        }

        tracing::info!(
            "Logged meal '{}' ({} kcal), total {} kcal, {} points",
            meal.name,
            meal.calories,
            self.calories_consumed,
            self.points
        );
        Ok(meal)
    }

    pub fn remaining_calories(&self, target: i64) -> f64 {
        (target as f64 - self.calories_consumed).max(0.0)
    }

    pub fn share_text(&self, target: i64) -> String {
        format!(
            "My daily progress: Consumed {} kcal, Remaining {} kcal! Points: {} #Fitness #Health",
            self.calories_consumed,
            self.remaining_calories(target),
            self.points
        )
    }

    /// Link that opens a pre-filled post with [`MealLog::share_text`].
    pub fn share_url(&self, target: i64) -> String {
        format!("{}{}", SHARE_BASE_URL, urlencoding::encode(&self.share_text(target)))
    }

    pub fn health_summary(&self, target: i64) -> String {
        format!(
            "Your health status is good! You've consumed {} kcal out of {} kcal. \
             You've earned {} points. Keep logging low-calorie meals to earn more!",
            self.calories_consumed, target, self.points
        )
    }
}

fn macro_grams(field: &str, value: Option<f64>) -> Result<f64> {
    match value {
        None => Ok(0.0),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(_) => Err(NutriTrackError::Validation(format!(
            "Invalid meal data. {} must be a non-negative number.",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::types::MealSource;

    // 2024-06-05 was a Wednesday.
    fn wednesday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap()
    }

    fn meal(name: &str, calories: f64) -> MealInput {
        MealInput {
            name: Some(name.to_string()),
            calories: Some(calories),
            ..Default::default()
        }
    }

    #[test]
    fn test_low_calorie_meal_earns_points() {
        let mut log = MealLog::new();
        log.log_meal(meal("Grilled Chicken Salad", 450.0), wednesday_noon())
            .unwrap();
        assert_eq!(log.points, 10);
        assert_eq!(log.calories_consumed, 450.0);
        assert_eq!(log.logged_meals.len(), 1);
    }

    #[test]
    fn test_high_calorie_meal_earns_nothing() {
        let mut log = MealLog::new();
        log.log_meal(meal("Lasagna", 600.0), wednesday_noon()).unwrap();
        assert_eq!(log.points, 0);
        assert_eq!(log.calories_consumed, 600.0);
    }

    #[test]
    fn test_exactly_500_earns_nothing() {
        let mut log = MealLog::new();
        log.log_meal(meal("Burrito", 500.0), wednesday_noon()).unwrap();
        assert_eq!(log.points, 0);
    }

    #[test]
    fn test_meal_goes_to_weekday_bucket() {
        let mut log = MealLog::new();
        log.log_meal(meal("Oatmeal", 200.0), wednesday_noon()).unwrap();
        log.log_meal(meal("Soup", 150.0), wednesday_noon()).unwrap();
        let wed = log.weekly_data.iter().find(|d| d.day == "Wed").unwrap();
        assert_eq!(wed.calories, 350.0);
        let others: f64 = log
            .weekly_data
            .iter()
            .filter(|d| d.day != "Wed")
            .map(|d| d.calories)
            .sum();
        assert_eq!(others, 0.0);
    }

    #[test]
    fn test_defaults_applied() {
        let mut log = MealLog::new();
        let logged = log.log_meal(meal("Toast", 120.0), wednesday_noon()).unwrap();
        assert_eq!(logged.source, MealSource::Homemade);
        assert_eq!(logged.protein, 0.0);
        assert_eq!(logged.timestamp, wednesday_noon());
    }

    #[test]
    fn test_invalid_meals_leave_log_untouched() {
        let mut log = MealLog::new();
        let before = log.clone();

        assert!(log.log_meal(meal("  ", 100.0), wednesday_noon()).is_err());
        assert!(log.log_meal(meal("Rice", -5.0), wednesday_noon()).is_err());
        assert!(log
            .log_meal(
                MealInput {
                    name: Some("Rice".into()),
                    ..Default::default()
                },
                wednesday_noon()
            )
            .is_err());
        let mut bad_macro = meal("Rice", 200.0);
        bad_macro.fat = Some(f64::INFINITY);
        assert!(log.log_meal(bad_macro, wednesday_noon()).is_err());

        assert_eq!(log, before);
    }

    #[test]
    fn test_malformed_week_is_reset() {
        let mut log = MealLog::new();
        log.weekly_data.truncate(3);
        log.log_meal(meal("Apple", 80.0), wednesday_noon()).unwrap();
        assert_eq!(log.weekly_data.len(), 7);
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut log = MealLog::new();
        log.log_meal(meal("Feast", 2500.0), wednesday_noon()).unwrap();
        assert_eq!(log.remaining_calories(2000), 0.0);
        assert_eq!(log.remaining_calories(3000), 500.0);
    }

    #[test]
    fn test_share_text_and_url() {
        let mut log = MealLog::new();
        log.log_meal(meal("Salad", 300.0), wednesday_noon()).unwrap();
        assert_eq!(
            log.share_text(2000),
            "My daily progress: Consumed 300 kcal, Remaining 1700 kcal! Points: 10 #Fitness #Health"
        );
        let url = log.share_url(2000);
        assert!(url.starts_with("https://x.com/intent/post?text=My%20daily%20progress"));
        assert!(url.contains("%23Fitness"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_health_summary_mentions_totals() {
        let log = MealLog::new();
        let summary = log.health_summary(2007);
        assert!(summary.contains("0 kcal out of 2007 kcal"));
    }
}
