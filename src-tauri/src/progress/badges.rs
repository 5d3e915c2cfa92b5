//! Achievement badges unlocked by progress streaks.

use serde::{Deserialize, Serialize};

use super::advice::MealPlanAdherence;
use super::types::ProgressEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "5 Days Logging Streak")]
    LoggingStreak5,
    #[serde(rename = "10 Days Logging Streak")]
    LoggingStreak10,
    #[serde(rename = "3 Days Calorie Goal Streak")]
    CalorieGoalStreak3,
    #[serde(rename = "3 Days Meal Plan Streak")]
    MealPlanStreak3,
}

impl Badge {
    pub const ALL: [Badge; 4] = [
        Badge::LoggingStreak5,
        Badge::LoggingStreak10,
        Badge::CalorieGoalStreak3,
        Badge::MealPlanStreak3,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Badge::LoggingStreak5 => "5 Days Logging Streak",
            Badge::LoggingStreak10 => "10 Days Logging Streak",
            Badge::CalorieGoalStreak3 => "3 Days Calorie Goal Streak",
            Badge::MealPlanStreak3 => "3 Days Meal Plan Streak",
        }
    }

    pub fn from_label(label: &str) -> Option<Badge> {
        Badge::ALL.into_iter().find(|b| b.label() == label)
    }

    fn is_earned(&self, streaks: &Streaks) -> bool {
        match self {
            Badge::LoggingStreak5 => streaks.logging >= 5,
            Badge::LoggingStreak10 => streaks.logging >= 10,
            Badge::CalorieGoalStreak3 => streaks.calorie_goal >= 3,
            Badge::MealPlanStreak3 => streaks.meal_plan >= 3,
        }
    }
}

/// Streak counters over the whole progress history.
///
/// These are counts of qualifying entries, not consecutive runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streaks {
    pub logging: usize,
    pub calorie_goal: usize,
    pub meal_plan: usize,
}

impl Streaks {
    pub fn compute(entries: &[ProgressEntry], calorie_goal: Option<f64>) -> Self {
        let calorie_goal_count = match calorie_goal {
            Some(goal) if goal > 0.0 => entries
                .iter()
                .filter(|e| e.calorie_intake <= goal * 1.1)
                .count(),
            _ => 0,
        };
        Self {
            logging: entries.len(),
            calorie_goal: calorie_goal_count,
            meal_plan: entries
                .iter()
                .filter(|e| e.meal_plan_adherence == MealPlanAdherence::Followed)
                .count(),
        }
    }
}

/// Unlocked badges in unlock order. Badges are never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeSet {
    unlocked: Vec<Badge>,
}

impl BadgeSet {
    pub fn from_unlocked(badges: impl IntoIterator<Item = Badge>) -> Self {
        let mut set = Self::default();
        for badge in badges {
            set.unlock(badge);
        }
        set
    }

    pub fn contains(&self, badge: Badge) -> bool {
        self.unlocked.contains(&badge)
    }

    pub fn as_slice(&self) -> &[Badge] {
        &self.unlocked
    }

    pub fn into_vec(self) -> Vec<Badge> {
        self.unlocked
    }

    fn unlock(&mut self, badge: Badge) -> bool {
        if self.contains(badge) {
            return false;
        }
        self.unlocked.push(badge);
        true
    }

    /// Unlock every badge the streaks qualify for; returns the new ones.
    pub fn evaluate(&mut self, streaks: &Streaks) -> Vec<Badge> {
        Badge::ALL
            .into_iter()
            .filter(|badge| badge.is_earned(streaks))
            .filter(|badge| self.unlock(*badge))
            .collect()
    }
}
