use chrono::{DateTime, Utc};
use serde_json::Value;

use super::types::{DietPlan, PlannedMeal};
use crate::ai::json::parse_json_object;
use crate::ai::prompts::meal_plan_prompt;
use crate::ai::{GenerationRequest, TextGenerator};
use crate::error::{NutriTrackError, Result};

/// Low temperature keeps plans close to the requested shape.
const PLAN_TEMPERATURE: f32 = 0.1;

/// Ask the generator for a breakfast/lunch/dinner plan.
///
/// Either a complete plan comes back or an error does: a reply that is not
/// JSON or lacks one of the three slots is `MalformedResponse`.
pub async fn generate_plan(
    generator: &dyn TextGenerator,
    dietary_preferences: &str,
    calorie_goal: Option<f64>,
    now: DateTime<Utc>,
) -> Result<DietPlan> {
    let preferences = dietary_preferences.trim();
    let goal = match calorie_goal {
        Some(goal) if goal.is_finite() && goal > 0.0 && !preferences.is_empty() => goal,
        _ => {
            return Err(NutriTrackError::validation(
                "Please select dietary preferences and enter a calorie goal.",
            ))
        }
    };

    let request =
        GenerationRequest::text(meal_plan_prompt(preferences, goal)).with_temperature(PLAN_TEMPERATURE);
    let reply = generator.generate(&request).await?;

    let plan = parse_diet_plan(&reply, now)?;
    tracing::info!(
        "Generated '{}' ({} kcal planned for a {} kcal goal)",
        plan.plan_name,
        plan.total_calories(),
        goal
    );
    Ok(plan)
}

/// Parse a model reply into a plan named after `now`'s date.
pub fn parse_diet_plan(reply: &str, now: DateTime<Utc>) -> Result<DietPlan> {
    let object = parse_json_object(reply)?;
    Ok(DietPlan {
        plan_name: format!("Meal Plan {}", now.format("%d/%m/%Y")),
        breakfast: slot(&object, "breakfast")?,
        lunch: slot(&object, "lunch")?,
        dinner: slot(&object, "dinner")?,
        created_at: now,
    })
}

fn slot(object: &serde_json::Map<String, Value>, name: &str) -> Result<PlannedMeal> {
    let value = match object.get(name) {
        Some(v @ Value::Object(_)) => v.clone(),
        _ => {
            return Err(NutriTrackError::MalformedResponse(format!(
                "Incomplete meal plan data received: missing {}",
                name
            )))
        }
    };
    let meal: PlannedMeal = serde_json::from_value(value).map_err(|e| {
        NutriTrackError::MalformedResponse(format!("Invalid {} in meal plan: {}", name, e))
    })?;
    if !meal.calories.is_finite() || meal.calories < 0.0 {
        return Err(NutriTrackError::MalformedResponse(format!(
            "Invalid calories for {}",
            name
        )));
    }
    Ok(meal)
}
