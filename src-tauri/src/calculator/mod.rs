//! Body metrics and daily calorie targets from a user profile.

pub mod formulas;
pub mod types;
pub mod validation;

pub use formulas::{
    bmi, bmi_category, bmr, daily_calorie_target, ideal_calorie_range, maintenance_calories,
};
pub use types::*;
pub use validation::{range_warnings, validate_profile};

use crate::error::Result;

/// Validate raw profile values and derive every goal figure from them.
pub fn compute_goals(input: &ProfileInput) -> Result<GoalSummary> {
    let profile = validate_profile(input)?;
    Ok(summarize(&profile))
}

/// Derive goal figures from an already validated profile.
pub fn summarize(profile: &UserProfile) -> GoalSummary {
    let bmi_value = bmi(profile.weight, profile.height);
    let target = daily_calorie_target(profile);

    GoalSummary {
        bmi: bmi_value,
        bmi_category: bmi_category(bmi_value),
        bmr: bmr(profile.weight, profile.height, profile.age, profile.gender),
        maintenance_calories: maintenance_calories(profile),
        daily_calorie_target: target,
        ideal_range: ideal_calorie_range(target as f64),
        warnings: range_warnings(profile),
    }
}
