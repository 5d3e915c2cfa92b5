//! Advice derived from one progress entry.

use serde::{Deserialize, Serialize};

/// Calories within this fraction of a target count as on track.
const TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthAdvice {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl HealthAdvice {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 24.9 {
            Self::Normal
        } else if bmi < 29.9 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight - Eat more balanced meals!",
            Self::Normal => "Normal weight - Keep it up!",
            Self::Overweight => "Overweight - Consider light exercise.",
            Self::Obese => "Obese - Consult a doctor for a diet plan.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieAdvice {
    NoData,
    Under,
    OnTrack,
    Over,
}

impl CalorieAdvice {
    pub fn assess(intake: f64, goal: Option<f64>) -> Self {
        match Band::of(intake, goal) {
            Band::Missing => Self::NoData,
            Band::Below => Self::Under,
            Band::Within => Self::OnTrack,
            Band::Above => Self::Over,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NoData => "Enter calorie intake to get advice.",
            Self::Under => {
                "You're under your calorie goal. Consider eating more nutrient-dense foods."
            }
            Self::OnTrack => "Great job! You're on track with your calorie goal.",
            Self::Over => "You've exceeded your calorie goal. Try reducing portion sizes tomorrow.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPlanAdherence {
    NoData,
    Under,
    Followed,
    Over,
}

impl MealPlanAdherence {
    pub fn assess(intake: f64, plan_calories: Option<f64>) -> Self {
        match Band::of(intake, plan_calories) {
            Band::Missing => Self::NoData,
            Band::Below => Self::Under,
            Band::Within => Self::Followed,
            Band::Above => Self::Over,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NoData => "No meal plan data available.",
            Self::Under => {
                "You ate less than your meal plan. Consider following the plan closely."
            }
            Self::Followed => "Great! You followed your meal plan closely.",
            Self::Over => "You ate more than your meal plan. Stick to planned portions tomorrow.",
        }
    }
}

enum Band {
    Missing,
    Below,
    Within,
    Above,
}

impl Band {
    // Zero intake or a zero target carries no information.
    fn of(intake: f64, target: Option<f64>) -> Self {
        let target = match target {
            Some(t) if t > 0.0 && intake > 0.0 => t,
            _ => return Band::Missing,
        };
        if intake <= target * (1.0 - TOLERANCE) {
            Band::Below
        } else if intake <= target * (1.0 + TOLERANCE) {
            Band::Within
        } else {
            Band::Above
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_advice_bands() {
        assert_eq!(HealthAdvice::from_bmi(17.0), HealthAdvice::Underweight);
        assert_eq!(HealthAdvice::from_bmi(22.0), HealthAdvice::Normal);
        assert_eq!(HealthAdvice::from_bmi(27.0), HealthAdvice::Overweight);
        assert_eq!(HealthAdvice::from_bmi(31.0), HealthAdvice::Obese);
    }

    #[test]
    fn test_calorie_advice_boundaries() {
        let goal = Some(2000.0);
        assert_eq!(CalorieAdvice::assess(1800.0, goal), CalorieAdvice::Under);
        assert_eq!(CalorieAdvice::assess(1801.0, goal), CalorieAdvice::OnTrack);
        assert_eq!(CalorieAdvice::assess(2200.0, goal), CalorieAdvice::OnTrack);
        assert_eq!(CalorieAdvice::assess(2201.0, goal), CalorieAdvice::Over);
    }

    #[test]
    fn test_calorie_advice_without_goal() {
        assert_eq!(CalorieAdvice::assess(1800.0, None), CalorieAdvice::NoData);
        assert_eq!(CalorieAdvice::assess(1800.0, Some(0.0)), CalorieAdvice::NoData);
        assert_eq!(CalorieAdvice::assess(0.0, Some(2000.0)), CalorieAdvice::NoData);
    }

    #[test]
    fn test_meal_plan_adherence() {
        assert_eq!(MealPlanAdherence::assess(1500.0, None), MealPlanAdherence::NoData);
        assert_eq!(
            MealPlanAdherence::assess(1500.0, Some(1500.0)),
            MealPlanAdherence::Followed
        );
        assert_eq!(MealPlanAdherence::assess(1000.0, Some(1500.0)), MealPlanAdherence::Under);
        assert_eq!(MealPlanAdherence::assess(2000.0, Some(1500.0)), MealPlanAdherence::Over);
    }
}
