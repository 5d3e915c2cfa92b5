use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One slot of a daily plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// A generated breakfast/lunch/dinner plan. All three slots are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub plan_name: String,
    pub breakfast: PlannedMeal,
    pub lunch: PlannedMeal,
    pub dinner: PlannedMeal,
    pub created_at: DateTime<Utc>,
}

impl DietPlan {
    pub fn meals(&self) -> [&PlannedMeal; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }

    /// Sum of the three slots' calories.
    pub fn total_calories(&self) -> f64 {
        self.meals().iter().map(|m| m.calories).sum()
    }
}

/// What the generator is asked for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRequest {
    pub dietary_preferences: String,
    pub calorie_goal: Option<f64>,
}

/// Result of the generate command: the plan plus a non-fatal save warning.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPlan {
    pub plan: DietPlan,
    pub grocery_list: Vec<String>,
    pub warning: Option<String>,
}
