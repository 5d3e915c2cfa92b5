use chrono::{TimeZone, Utc};

use nutritrack_tauri::calculator::{compute_goals, BmiCategory, ProfileInput};
use nutritrack_tauri::tracking::{search_suggestions, MealInput, MealLog, MealSource};

fn meal(name: &str, calories: f64) -> MealInput {
    MealInput {
        name: Some(name.to_string()),
        calories: Some(calories),
        ..Default::default()
    }
}

#[test]
fn test_reference_profile_goals() {
    let input = ProfileInput {
        height: Some(170.0),
        weight: Some(70.0),
        age: Some(30),
        gender: Some("male".into()),
        activity_level: Some("moderate".into()),
        goal: Some("weight_loss".into()),
        ..Default::default()
    };
    let summary = compute_goals(&input).expect("reference profile is valid");

    assert_eq!(summary.bmi, 24.22);
    assert_eq!(summary.bmi_category, BmiCategory::Normal);
    assert_eq!(summary.bmr, 1617.5);
    assert_eq!(summary.maintenance_calories, 2507);
    assert_eq!(summary.daily_calorie_target, 2007);
}

#[test]
fn test_missing_profile_fields_rejected() {
    let input = ProfileInput {
        height: Some(170.0),
        ..Default::default()
    };
    let err = compute_goals(&input).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_small_meals_earn_points() {
    let monday = Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap();
    let mut log = MealLog::default();

    log.log_meal(meal("Oatmeal", 450.0), monday).unwrap();
    assert_eq!(log.points, 10);

    log.log_meal(meal("Burger", 600.0), monday).unwrap();
    assert_eq!(log.points, 10);
    assert_eq!(log.calories_consumed, 1050.0);
    assert_eq!(log.logged_meals.len(), 2);
    assert_eq!(log.remaining_calories(2000), 950.0);
}

#[test]
fn test_invalid_meal_leaves_log_untouched() {
    let now = Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap();
    let mut log = MealLog::default();
    assert!(log.log_meal(meal("", 300.0), now).is_err());
    assert!(log.log_meal(meal("Soup", -5.0), now).is_err());
    assert!(log.logged_meals.is_empty());
    assert_eq!(log.points, 0);
}

#[test]
fn test_share_url_is_encoded() {
    let now = Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap();
    let mut log = MealLog::default();
    log.log_meal(meal("Salad", 400.0), now).unwrap();

    let url = log.share_url(2000);
    assert!(url.starts_with("https://x.com/intent/post?text="));
    assert!(!url.contains(' '));
    assert!(url.contains("%23Fitness"));
}

#[test]
fn test_catalog_search() {
    let results = search_suggestions("chicken");
    assert!(results.len() >= 2);
    assert!(results
        .iter()
        .all(|s| s.name.to_lowercase().contains("chicken")));

    let input = MealInput::from(&results[0]);
    assert_eq!(input.name.as_deref(), Some(results[0].name.as_str()));
    assert!(matches!(
        input.source,
        Some(MealSource::Homemade) | Some(MealSource::Restaurant)
    ));
}
