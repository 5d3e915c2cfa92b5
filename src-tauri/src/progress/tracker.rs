use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::advice::{CalorieAdvice, HealthAdvice, MealPlanAdherence};
use super::badges::{Badge, BadgeSet, Streaks};
use super::types::{MealPlanSnapshot, ProgressEntry, ProgressInput, ProgressOutcome};
use crate::calculator;
use crate::diet_plan::{planned_total_calories, DietPlan};
use crate::error::{NutriTrackError, Result};

/// Days of history shown in the weekly view.
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Progress history plus the badges it has earned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressTracker {
    pub entries: Vec<ProgressEntry>,
    pub badges: BadgeSet,
}

impl ProgressTracker {
    pub fn new(entries: Vec<ProgressEntry>, badges: BadgeSet) -> Self {
        Self { entries, badges }
    }

    /// Record today's weight and intake.
    ///
    /// Adherence is judged against `meal_plan` when one is given. On error
    /// nothing is appended.
    pub fn record_progress(
        &mut self,
        input: &ProgressInput,
        calorie_goal: Option<f64>,
        meal_plan: Option<&DietPlan>,
        today: NaiveDate,
    ) -> Result<ProgressOutcome> {
        let (weight, height, intake) = match (input.weight, input.height, input.calorie_intake) {
            (Some(w), Some(h), Some(c)) => (w, h, c),
            _ => {
                return Err(NutriTrackError::validation(
                    "Please enter weight, height, and calorie intake.",
                ))
            }
        };
        if [weight, height, intake]
            .iter()
            .any(|v| !v.is_finite() || *v <= 0.0)
        {
            return Err(NutriTrackError::validation(
                "Weight, height, and calorie intake must be positive numbers.",
            ));
        }

        let bmi = calculator::bmi(weight, height);
        let plan_calories = planned_total_calories(meal_plan);
        let snapshot = meal_plan.map(MealPlanSnapshot::from_plan);

        let entry = ProgressEntry {
            date: today,
            weight,
            bmi,
            calorie_intake: intake,
            health_advice: HealthAdvice::from_bmi(bmi),
            calorie_advice: CalorieAdvice::assess(intake, calorie_goal),
            meal_plan_adherence: MealPlanAdherence::assess(intake, plan_calories),
            meal_plan: snapshot,
        };
        self.entries.push(entry.clone());

        let streaks = Streaks::compute(&self.entries, calorie_goal);
        let newly_unlocked = self.badges.evaluate(&streaks);
        for badge in &newly_unlocked {
            tracing::info!("Badge unlocked: {}", badge.label());
        }

        Ok(ProgressOutcome {
            entry,
            weekly: self.weekly(today),
            newly_unlocked,
        })
    }

    pub fn weekly(&self, today: NaiveDate) -> Vec<ProgressEntry> {
        weekly_window(&self.entries, today)
    }

    pub fn badges(&self) -> &[Badge] {
        self.badges.as_slice()
    }
}

/// Entries dated on or after `today` minus seven calendar days.
pub fn weekly_window(entries: &[ProgressEntry], today: NaiveDate) -> Vec<ProgressEntry> {
    let cutoff = today - Duration::days(WEEKLY_WINDOW_DAYS);
    entries
        .iter()
        .filter(|e| e.date >= cutoff)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diet_plan::PlannedMeal;
    use chrono::{TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn input(intake: f64) -> ProgressInput {
        ProgressInput {
            weight: Some(70.0),
            height: Some(170.0),
            calorie_intake: Some(intake),
        }
    }

    fn plan(total: f64) -> DietPlan {
        let slot = |name: &str| PlannedMeal {
            name: name.to_string(),
            calories: total / 3.0,
            ingredients: vec![],
        };
        DietPlan {
            plan_name: "Test Plan".into(),
            breakfast: slot("Oats"),
            lunch: slot("Salad"),
            dinner: slot("Fish"),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_entry_fields() {
        let mut tracker = ProgressTracker::default();
        let outcome = tracker
            .record_progress(&input(1900.0), Some(2000.0), None, today())
            .unwrap();
        assert_eq!(outcome.entry.bmi, 24.22);
        assert_eq!(outcome.entry.health_advice, HealthAdvice::Normal);
        assert_eq!(outcome.entry.calorie_advice, CalorieAdvice::OnTrack);
        assert_eq!(outcome.entry.meal_plan_adherence, MealPlanAdherence::NoData);
        assert!(outcome.entry.meal_plan.is_none());
        assert_eq!(outcome.weekly.len(), 1);
    }

    #[test]
    fn test_missing_fields_rejected_without_append() {
        let mut tracker = ProgressTracker::default();
        let err = tracker
            .record_progress(
                &ProgressInput {
                    weight: Some(70.0),
                    ..Default::default()
                },
                Some(2000.0),
                None,
                today(),
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert!(tracker.entries.is_empty());
    }

    #[test]
    fn test_five_entries_unlock_logging_badge_once() {
        let mut tracker = ProgressTracker::default();
        for i in 0..4 {
            let outcome = tracker
                .record_progress(&input(5000.0), None, None, today() - Duration::days(i))
                .unwrap();
            assert!(outcome.newly_unlocked.is_empty());
        }
        let fifth = tracker
            .record_progress(&input(5000.0), None, None, today())
            .unwrap();
        assert_eq!(fifth.newly_unlocked, vec![Badge::LoggingStreak5]);

        let sixth = tracker
            .record_progress(&input(5000.0), None, None, today())
            .unwrap();
        assert!(sixth.newly_unlocked.is_empty());
        assert_eq!(tracker.badges(), &[Badge::LoggingStreak5]);
    }

    #[test]
    fn test_calorie_streak_needs_goal() {
        let mut tracker = ProgressTracker::default();
        for _ in 0..3 {
            tracker
                .record_progress(&input(1500.0), None, None, today())
                .unwrap();
        }
        assert!(tracker.badges().is_empty());

        let outcome = tracker
            .record_progress(&input(1500.0), Some(2000.0), None, today())
            .unwrap();
        assert_eq!(outcome.newly_unlocked, vec![Badge::CalorieGoalStreak3]);
    }

    #[test]
    fn test_meal_plan_streak() {
        let mut tracker = ProgressTracker::default();
        let plan = plan(1800.0);
        let mut unlocked = Vec::new();
        for _ in 0..3 {
            let outcome = tracker
                .record_progress(&input(1800.0), None, Some(&plan), today())
                .unwrap();
            assert_eq!(outcome.entry.meal_plan_adherence, MealPlanAdherence::Followed);
            unlocked.extend(outcome.newly_unlocked);
        }
        assert_eq!(unlocked, vec![Badge::MealPlanStreak3]);
        let snapshot = tracker.entries[0].meal_plan.as_ref().unwrap();
        assert_eq!(snapshot.breakfast, "Oats");
    }

    #[test]
    fn test_unnamed_plan_slot_snapshots_as_na() {
        let mut plan = plan(1500.0);
        plan.lunch.name = String::new();
        let mut tracker = ProgressTracker::default();
        let outcome = tracker
            .record_progress(&input(1500.0), None, Some(&plan), today())
            .unwrap();
        let snapshot = outcome.entry.meal_plan.unwrap();
        assert_eq!(snapshot.lunch, "N/A");
        assert_eq!(snapshot.total_calories, 1500.0);
        assert_eq!(outcome.entry.meal_plan_adherence, MealPlanAdherence::Followed);
    }

    #[test]
    fn test_weekly_window_boundary() {
        let mut tracker = ProgressTracker::default();
        tracker
            .record_progress(&input(2000.0), None, None, today() - Duration::days(8))
            .unwrap();
        tracker
            .record_progress(&input(2000.0), None, None, today() - Duration::days(7))
            .unwrap();
        let weekly = tracker.weekly(today());
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].date, today() - Duration::days(7));
    }
}
