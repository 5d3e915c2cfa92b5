use chrono::{Duration, NaiveDate};

use nutritrack_tauri::progress::{
    weekly_window, Badge, CalorieAdvice, ProgressInput, ProgressTracker,
};

fn input(intake: f64) -> ProgressInput {
    ProgressInput {
        weight: Some(70.0),
        height: Some(170.0),
        calorie_intake: Some(intake),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

#[test]
fn test_five_entries_unlock_logging_badge_once() {
    let mut tracker = ProgressTracker::default();

    for d in 1..=4 {
        let outcome = tracker.record_progress(&input(2500.0), None, None, day(d)).unwrap();
        assert!(outcome.newly_unlocked.is_empty(), "day {} unlocked early", d);
    }

    let fifth = tracker.record_progress(&input(2500.0), None, None, day(5)).unwrap();
    assert_eq!(fifth.newly_unlocked, vec![Badge::LoggingStreak5]);

    let sixth = tracker.record_progress(&input(2500.0), None, None, day(6)).unwrap();
    assert!(sixth.newly_unlocked.is_empty());
    assert_eq!(
        tracker.badges().iter().filter(|b| **b == Badge::LoggingStreak5).count(),
        1
    );
}

#[test]
fn test_calorie_goal_badge_needs_a_goal() {
    let mut tracker = ProgressTracker::default();
    for d in 1..=3 {
        tracker.record_progress(&input(1800.0), None, None, day(d)).unwrap();
    }
    assert!(!tracker.badges().contains(&Badge::CalorieGoalStreak3));

    let mut tracker = ProgressTracker::default();
    let mut unlocked = Vec::new();
    for d in 1..=3 {
        let outcome = tracker
            .record_progress(&input(1800.0), Some(2000.0), None, day(d))
            .unwrap();
        assert_eq!(outcome.entry.calorie_advice, CalorieAdvice::OnTrack);
        unlocked.extend(outcome.newly_unlocked);
    }
    assert_eq!(unlocked, vec![Badge::CalorieGoalStreak3]);
}

#[test]
fn test_invalid_progress_appends_nothing() {
    let mut tracker = ProgressTracker::default();
    let missing = ProgressInput {
        weight: Some(70.0),
        height: None,
        calorie_intake: Some(2000.0),
    };
    assert!(tracker.record_progress(&missing, None, None, day(1)).is_err());
    assert!(tracker.entries.is_empty());
}

#[test]
fn test_weekly_window_boundary() {
    let today = day(15);
    let mut tracker = ProgressTracker::default();
    tracker
        .record_progress(&input(2000.0), None, None, today - Duration::days(8))
        .unwrap();
    tracker
        .record_progress(&input(2000.0), None, None, today - Duration::days(7))
        .unwrap();
    tracker.record_progress(&input(2000.0), None, None, today).unwrap();

    let weekly = weekly_window(&tracker.entries, today);
    let dates: Vec<NaiveDate> = weekly.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![day(8), day(15)]);
}

#[test]
fn test_entry_date_serializes_day_first() {
    let mut tracker = ProgressTracker::default();
    let outcome = tracker.record_progress(&input(2000.0), None, None, day(9)).unwrap();
    let json = serde_json::to_value(&outcome.entry).unwrap();
    assert_eq!(json["date"], "09/06/2024");
    assert_eq!(json["bmi"], 24.22);
}
