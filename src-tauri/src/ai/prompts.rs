//! Prompt templates for the Gemini calls.

/// Daily three-meal plan for a preference and calorie goal, as strict JSON.
pub fn meal_plan_prompt(dietary_preferences: &str, calorie_goal: f64) -> String {
    format!(
        r#"Generate a daily meal plan for a person with dietary preference: {prefs}, calorie goal: {goal}.
Provide breakfast, lunch, and dinner with name, calories, and ingredients in strict JSON format:
{{
  "breakfast": {{ "name": "", "calories": 0, "ingredients": [] }},
  "lunch": {{ "name": "", "calories": 0, "ingredients": [] }},
  "dinner": {{ "name": "", "calories": 0, "ingredients": [] }}
}}
Ensure the total calories are close to the goal and respect the dietary preferences."#,
        prefs = dietary_preferences,
        goal = calorie_goal
    )
}

/// Nutrition estimate for a meal photo. An empty object means no usable meal.
pub fn meal_photo_prompt(dietary_preferences: Option<&str>, calorie_goal: Option<f64>) -> String {
    let prefs = dietary_preferences
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or("none");
    let goal = calorie_goal
        .map(|g| g.to_string())
        .unwrap_or_else(|| "default".to_string());

    format!(
        r#"You are a specialized meal analysis agent. Analyze the image to identify the meal components and estimate the total nutritional breakdown for the entire meal shown. If the image does not clearly show a meal (e.g., contains people, landscapes, or non-food objects), return an empty object {{}}. Provide details based on standard USDA or similar database values, summing up for all visible items. Ensure consistent output for similar meals. Output in strict JSON format only:
{{
  "description": "Brief description of the meal and its main components",
  "calories": number (total estimated calories for the meal),
  "protein": number (total grams),
  "carbs": number (total grams),
  "fat": number (total grams)
}}
User profile:
- Dietary preferences: {prefs}
- Calorie goal: {goal}
If the meal does not match the dietary preferences (e.g., non-vegan food for vegan preference) or no meal is detected, return an empty object {{}}. Do not estimate values randomly; use standard nutritional data and reasonable portion sizes."#
    )
}

pub fn assistant_prompt(question: &str) -> String {
    format!(
        "You are NutriTrack, an AI health assistant. Reply to this user query in a friendly \
         and informative way about diet, calories, or nutrition: \"{}\"",
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_plan_prompt_includes_inputs() {
        let prompt = meal_plan_prompt("vegetarian", 1800.0);
        assert!(prompt.contains("dietary preference: vegetarian"));
        assert!(prompt.contains("calorie goal: 1800"));
        assert!(prompt.contains("\"dinner\""));
    }

    #[test]
    fn test_photo_prompt_defaults() {
        let prompt = meal_photo_prompt(None, None);
        assert!(prompt.contains("Dietary preferences: none"));
        assert!(prompt.contains("Calorie goal: default"));
        assert!(prompt.contains("return an empty object {}"));
    }
}
