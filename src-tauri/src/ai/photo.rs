//! Nutrition estimate from a meal photo.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::image_prep::prepare_meal_photo;
use super::json::parse_json_object;
use super::prompts::meal_photo_prompt;
use super::{GenerationRequest, TextGenerator};
use crate::error::{NutriTrackError, Result};
use crate::tracking::{MealInput, MealSource};

/// What the model reports for one photographed meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAnalysis {
    pub description: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MealAnalysis {
    /// The analysis as a loggable meal with source `scanned`.
    pub fn to_meal_input(&self) -> MealInput {
        MealInput {
            name: Some(self.description.clone()),
            calories: Some(self.calories),
            protein: Some(self.protein),
            carbs: Some(self.carbs),
            fat: Some(self.fat),
            source: Some(MealSource::Scanned),
        }
    }
}

pub async fn analyze_meal_photo(
    generator: &dyn TextGenerator,
    image_bytes: &[u8],
    mime_type: &str,
    dietary_preferences: Option<&str>,
    calorie_goal: Option<f64>,
) -> Result<MealAnalysis> {
    let image = prepare_meal_photo(image_bytes, mime_type)?;
    let request = GenerationRequest::text(meal_photo_prompt(dietary_preferences, calorie_goal))
        .with_image(image)
        .with_temperature(0.0);

    let reply = generator.generate(&request).await?;
    parse_meal_analysis(&reply)
}

/// An empty object is the model's way of saying "no meal here".
pub fn parse_meal_analysis(reply: &str) -> Result<MealAnalysis> {
    let object = parse_json_object(reply)?;
    if object.is_empty() {
        return Err(NutriTrackError::NoMealDetected);
    }

    let description = object
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| {
            NutriTrackError::MalformedResponse("meal analysis has no description".to_string())
        })?
        .to_string();

    Ok(MealAnalysis {
        description,
        calories: number_field(&object, "calories")?,
        protein: number_field(&object, "protein")?,
        carbs: number_field(&object, "carbs")?,
        fat: number_field(&object, "fat")?,
    })
}

fn number_field(object: &serde_json::Map<String, Value>, field: &str) -> Result<f64> {
    object
        .get(field)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| {
            NutriTrackError::MalformedResponse(format!(
                "meal analysis field '{}' is missing or not a non-negative number",
                field
            ))
        })
}
