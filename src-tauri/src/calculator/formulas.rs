//! BMI and energy expenditure formulas.

use super::types::{BmiCategory, Gender, UserProfile};

/// Body Mass Index: weight (kg) / height (m)², rounded to 2 decimals.
///
/// Returns 0.0 when either input is not positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    round_to(weight_kg / (height_m * height_m), 2)
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.9 {
        BmiCategory::Normal
    } else if bmi < 29.9 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal Metabolic Rate using the Mifflin-St Jeor equation.
///
/// `BMR = 10 × weight + 6.25 × height − 5 × age + s`, where `s` is +5 for
/// men and −161 for women.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Maintenance calories: BMR scaled by the activity multiplier, rounded.
pub fn maintenance_calories(profile: &UserProfile) -> i64 {
    let bmr = bmr(profile.weight, profile.height, profile.age, profile.gender);
    (bmr * profile.activity_level.multiplier()).round() as i64
}

/// Daily calorie target: maintenance calories plus the goal offset.
pub fn daily_calorie_target(profile: &UserProfile) -> i64 {
    maintenance_calories(profile) + profile.goal.calorie_offset()
}

/// The ±10% band around a calorie goal that counts as "on track".
pub fn ideal_calorie_range(goal: f64) -> (i64, i64) {
    ((goal * 0.9).round() as i64, (goal * 1.1).round() as i64)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::types::{ActivityLevel, Goal};

    fn sample_profile() -> UserProfile {
        UserProfile {
            height: 170.0,
            weight: 70.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            dietary_restrictions: vec![],
            goal: Goal::WeightLoss,
        }
    }

    #[test]
    fn test_bmi_two_decimals() {
        assert_eq!(bmi(70.0, 170.0), 24.22);
        assert_eq!(bmi(50.0, 160.0), 19.53);
    }

    #[test]
    fn test_bmi_invalid_inputs() {
        assert_eq!(bmi(0.0, 170.0), 0.0);
        assert_eq!(bmi(70.0, -1.0), 0.0);
    }

    #[test]
    fn test_bmi_category_bands() {
        assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(24.9), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.9), BmiCategory::Obese);
    }

    #[test]
    fn test_bmr_male() {
        // 700 + 1062.5 - 150 + 5
        assert_eq!(bmr(70.0, 170.0, 30, Gender::Male), 1617.5);
    }

    #[test]
    fn test_bmr_female() {
        assert_eq!(bmr(70.0, 170.0, 30, Gender::Female), 1451.5);
    }

    #[test]
    fn test_daily_target_weight_loss() {
        // round(1617.5 * 1.55) = round(2507.125) = 2507, minus 500
        let profile = sample_profile();
        assert_eq!(maintenance_calories(&profile), 2507);
        assert_eq!(daily_calorie_target(&profile), 2007);
    }

    #[test]
    fn test_daily_target_muscle_gain_and_maintenance() {
        let mut profile = sample_profile();
        profile.goal = Goal::MuscleGain;
        assert_eq!(daily_calorie_target(&profile), 2807);
        profile.goal = Goal::Maintenance;
        assert_eq!(daily_calorie_target(&profile), 2507);
    }

    #[test]
    fn test_activity_multiplier_applied() {
        let mut profile = sample_profile();
        profile.activity_level = ActivityLevel::Sedentary;
        profile.goal = Goal::Maintenance;
        // 1617.5 * 1.2 = 1941.0
        assert_eq!(daily_calorie_target(&profile), 1941);
    }

    #[test]
    fn test_ideal_calorie_range() {
        assert_eq!(ideal_calorie_range(2000.0), (1800, 2200));
    }
}
