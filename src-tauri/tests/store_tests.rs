use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

use nutritrack_tauri::progress::{Badge, ProgressInput};
use nutritrack_tauri::store::{UserDocumentStore, DATABASE_FILE};
use nutritrack_tauri::tracking::MealInput;

#[test]
fn test_meals_and_progress_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DATABASE_FILE);
    let now = Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap();

    {
        let store = UserDocumentStore::new(&path).unwrap();
        store
            .modify("u1", |doc| {
                let mut log = doc.meal_log();
                log.log_meal(
                    MealInput {
                        name: Some("Lentil Soup".into()),
                        calories: Some(350.0),
                        ..Default::default()
                    },
                    now,
                )?;
                doc.apply_meal_log(log);
                Ok(())
            })
            .unwrap();

        for d in 1..=5 {
            store
                .modify("u1", |doc| {
                    let mut tracker = doc.progress_tracker();
                    let input = ProgressInput {
                        weight: Some(65.0),
                        height: Some(165.0),
                        calorie_intake: Some(1900.0),
                    };
                    let today = NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
                    tracker.record_progress(&input, doc.calorie_goal, None, today)?;
                    doc.apply_progress(tracker);
                    Ok(())
                })
                .unwrap();
        }
    }

    let store = UserDocumentStore::new(&path).unwrap();
    let data = store.get_tracking_data("u1").unwrap().unwrap();
    assert_eq!(data.calories_consumed, 350.0);
    assert_eq!(data.points, 10);
    let wednesday = data.weekly_data.iter().find(|d| d.day == "Wed").unwrap();
    assert_eq!(wednesday.calories, 350.0);

    let doc = store.get_document("u1").unwrap().unwrap();
    assert_eq!(doc.progress_entries.len(), 5);
    assert_eq!(doc.badges, vec![Badge::LoggingStreak5]);
}

#[test]
fn test_failed_change_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let store = UserDocumentStore::new(&dir.path().join(DATABASE_FILE)).unwrap();

    let result = store.modify("u2", |doc| {
        let mut log = doc.meal_log();
        log.log_meal(MealInput::default(), Utc::now())?;
        doc.apply_meal_log(log);
        Ok(())
    });
    assert!(result.is_err());
    assert!(store.get_document("u2").unwrap().is_none());
}
