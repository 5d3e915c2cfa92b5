use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::advice::{CalorieAdvice, HealthAdvice, MealPlanAdherence};
use super::badges::Badge;
use crate::diet_plan::DietPlan;

/// Progress form values before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressInput {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub calorie_intake: Option<f64>,
}

/// Meal names and planned calories of the plan active when progress was logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanSnapshot {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub total_calories: f64,
}

impl MealPlanSnapshot {
    pub fn from_plan(plan: &DietPlan) -> Self {
        Self {
            breakfast: name_or_na(&plan.breakfast.name),
            lunch: name_or_na(&plan.lunch.name),
            dinner: name_or_na(&plan.dinner.name),
            total_calories: plan.total_calories(),
        }
    }
}

fn name_or_na(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "N/A".to_string()
    } else {
        trimmed.to_string()
    }
}

/// One logged day of progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    #[serde(with = "day_first_date")]
    pub date: NaiveDate,
    pub weight: f64,
    pub bmi: f64,
    pub calorie_intake: f64,
    pub health_advice: HealthAdvice,
    pub calorie_advice: CalorieAdvice,
    pub meal_plan_adherence: MealPlanAdherence,
    #[serde(default)]
    pub meal_plan: Option<MealPlanSnapshot>,
}

/// Returned by a successful progress recording.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressOutcome {
    pub entry: ProgressEntry,
    pub weekly: Vec<ProgressEntry>,
    pub newly_unlocked: Vec<Badge>,
}

/// Full progress view: history, last week and badges.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressOverview {
    pub entries: Vec<ProgressEntry>,
    pub weekly: Vec<ProgressEntry>,
    pub badges: Vec<Badge>,
}

/// Dates are stored as `DD/MM/YYYY`.
pub mod day_first_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}
