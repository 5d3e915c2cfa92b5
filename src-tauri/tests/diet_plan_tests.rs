use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use nutritrack_tauri::ai::{GenerationRequest, TextGenerator};
use nutritrack_tauri::diet_plan::{generate_plan, grocery_list};
use nutritrack_tauri::NutriTrackError;

/// Replies with canned text and remembers the last prompt.
struct CannedGenerator {
    reply: String,
    seen: Mutex<Vec<GenerationRequest>>,
}

impl CannedGenerator {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> nutritrack_tauri::Result<String> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}

const BREAKFAST_AND_LUNCH: &str = r#"{
  "breakfast": { "name": "Scrambled Eggs", "calories": 320, "ingredients": ["eggs", "butter"] },
  "lunch": { "name": "Egg Salad", "calories": 450, "ingredients": ["eggs", "lettuce"] }
}"#;

const FULL_PLAN: &str = r#"```json
{
  "breakfast": { "name": "Scrambled Eggs", "calories": 320, "ingredients": ["eggs", "butter"] },
  "lunch": { "name": "Lentil Soup", "calories": 450, "ingredients": ["lentils", "carrots"] },
  "dinner": { "name": "Frittata", "calories": 600, "ingredients": ["eggs", "spinach"] }
}
```"#;

#[tokio::test]
async fn test_plan_without_dinner_is_malformed() {
    let generator = CannedGenerator::new(BREAKFAST_AND_LUNCH);
    let now = Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap();

    let err = generate_plan(&generator, "vegetarian", Some(2000.0), now)
        .await
        .unwrap_err();
    match err {
        NutriTrackError::MalformedResponse(msg) => assert!(msg.contains("dinner")),
        other => panic!("expected MalformedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_plan_requires_preferences_before_calling_generator() {
    let generator = CannedGenerator::new(FULL_PLAN);
    let now = Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap();

    let err = generate_plan(&generator, "  ", Some(2000.0), now).await.unwrap_err();
    assert!(err.is_validation());
    assert!(generator.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_generated_plan_and_grocery_list() {
    let generator = CannedGenerator::new(FULL_PLAN);
    let now = Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap();

    let plan = generate_plan(&generator, "vegetarian", Some(2000.0), now)
        .await
        .unwrap();
    assert_eq!(plan.plan_name, "Meal Plan 03/06/2024");
    assert_eq!(plan.total_calories(), 1370.0);

    {
        let seen = generator.seen.lock().unwrap();
        assert!(seen[0].prompt.contains("vegetarian"));
        assert_eq!(seen[0].temperature, Some(0.1));
    }

    let second = generate_plan(&generator, "vegetarian", Some(2000.0), now)
        .await
        .unwrap();
    let items = grocery_list([&plan, &second]);
    assert_eq!(items.iter().filter(|i| i.as_str() == "eggs").count(), 1);
    assert_eq!(items, vec!["eggs", "butter", "lentils", "carrots", "spinach"]);
}
