use super::types::{ActivityLevel, Gender, Goal, ProfileInput, RangeWarning, UserProfile};
use crate::error::{NutriTrackError, Result};

/// Accepted form ranges. Values outside these are allowed but flagged.
const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 300.0);
const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);
const AGE_RANGE_YEARS: (u32, u32) = (10, 100);

/// Turn raw form values into a [`UserProfile`].
///
/// Fails when height, weight, age or gender is missing, when a number is not
/// finite and positive, or when gender is not `male`/`female`. Missing
/// activity level and goal fall back to their defaults.
pub fn validate_profile(input: &ProfileInput) -> Result<UserProfile> {
    let (height, weight, age, gender) =
        match (input.height, input.weight, input.age, input.gender.as_deref()) {
            (Some(h), Some(w), Some(a), Some(g)) if !g.trim().is_empty() => (h, w, a, g),
            _ => {
                return Err(NutriTrackError::validation(
                    "Please enter height, weight, age, and gender.",
                ))
            }
        };

    require_positive("height", height)?;
    require_positive("weight", weight)?;
    if age == 0 {
        return Err(NutriTrackError::validation("Age must be a positive number."));
    }

    let gender: Gender = gender.parse()?;
    let activity_level: ActivityLevel = match input.activity_level.as_deref().map(str::trim) {
        Some(level) if !level.is_empty() => level.parse()?,
        _ => Default::default(),
    };
    let goal: Goal = match input.goal.as_deref().map(str::trim) {
        Some(goal) if !goal.is_empty() => goal.parse()?,
        _ => Default::default(),
    };

    let mut profile = UserProfile {
        height,
        weight,
        age,
        gender,
        activity_level,
        dietary_restrictions: Vec::new(),
        goal,
    };
    for restriction in &input.dietary_restrictions {
        profile.add_restriction(restriction);
    }

    Ok(profile)
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(NutriTrackError::Validation(format!(
            "Please enter a valid positive number for {}.",
            field
        )));
    }
    Ok(())
}

/// Check a validated profile against the ranges the profile form accepts.
pub fn range_warnings(profile: &UserProfile) -> Vec<RangeWarning> {
    let mut warnings = Vec::new();

    if profile.height < HEIGHT_RANGE_CM.0 || profile.height > HEIGHT_RANGE_CM.1 {
        warnings.push(RangeWarning {
            field: "height".to_string(),
            message: "Height must be between 50 and 300 cm.".to_string(),
            value: profile.height.to_string(),
        });
    }
    if profile.weight < WEIGHT_RANGE_KG.0 || profile.weight > WEIGHT_RANGE_KG.1 {
        warnings.push(RangeWarning {
            field: "weight".to_string(),
            message: "Weight must be between 30 and 200 kg.".to_string(),
            value: profile.weight.to_string(),
        });
    }
    if profile.age < AGE_RANGE_YEARS.0 || profile.age > AGE_RANGE_YEARS.1 {
        warnings.push(RangeWarning {
            field: "age".to_string(),
            message: "Age must be between 10 and 100 years.".to_string(),
            value: profile.age.to_string(),
        });
    }

    warnings
}
