use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NutriTrackError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = NutriTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(NutriTrackError::validation("Please select gender.")),
        }
    }
}

/// Activity level used to scale BMR into daily energy expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = NutriTrackError;

    /// Accepts the canonical names plus the camelCase names older forms sent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightlyActive" => Ok(ActivityLevel::Light),
            "moderate" | "moderatelyActive" => Ok(ActivityLevel::Moderate),
            "active" | "veryActive" => Ok(ActivityLevel::Active),
            "very_active" | "superActive" => Ok(ActivityLevel::VeryActive),
            other => Err(NutriTrackError::Validation(format!(
                "Unknown activity level: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    #[default]
    Maintenance,
    MuscleGain,
}

impl Goal {
    /// Flat kcal adjustment applied on top of maintenance calories.
    pub fn calorie_offset(&self) -> i64 {
        match self {
            Goal::WeightLoss => -500,
            Goal::Maintenance => 0,
            Goal::MuscleGain => 300,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::Maintenance => "maintenance",
            Goal::MuscleGain => "muscle_gain",
        }
    }
}

impl FromStr for Goal {
    type Err = NutriTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "weight_loss" => Ok(Goal::WeightLoss),
            "maintenance" => Ok(Goal::Maintenance),
            "muscle_gain" => Ok(Goal::MuscleGain),
            other => Err(NutriTrackError::Validation(format!("Unknown goal: '{}'", other))),
        }
    }
}

/// Raw profile form values. Every field is optional so a missing value can be
/// reported instead of silently defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub goal: Option<String>,
}

/// A validated profile. Height in cm, weight in kg, age in years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub height: f64,
    pub weight: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub dietary_restrictions: Vec<String>,
    pub goal: Goal,
}

impl UserProfile {
    /// Add a restriction, ignoring blanks and duplicates.
    pub fn add_restriction(&mut self, restriction: &str) -> bool {
        let trimmed = restriction.trim();
        if trimmed.is_empty() || self.dietary_restrictions.iter().any(|r| r == trimmed) {
            return false;
        }
        self.dietary_restrictions.push(trimmed.to_string());
        true
    }

    pub fn remove_restriction(&mut self, restriction: &str) {
        self.dietary_restrictions.retain(|r| r != restriction);
    }
}

impl From<&UserProfile> for ProfileInput {
    fn from(profile: &UserProfile) -> Self {
        ProfileInput {
            height: Some(profile.height),
            weight: Some(profile.weight),
            age: Some(profile.age),
            gender: Some(profile.gender.as_str().to_string()),
            activity_level: Some(profile.activity_level.as_str().to_string()),
            dietary_restrictions: profile.dietary_restrictions.clone(),
            goal: Some(profile.goal.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn range_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "< 18.5",
            BmiCategory::Normal => "18.5 - 24.9",
            BmiCategory::Overweight => "25 - 29.9",
            BmiCategory::Obese => "≥ 30",
        }
    }
}

/// A profile value outside the range the form accepts. Not fatal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeWarning {
    pub field: String,
    pub message: String,
    pub value: String,
}

/// Everything derived from a profile in one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct GoalSummary {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub maintenance_calories: i64,
    pub daily_calorie_target: i64,
    pub ideal_range: (i64, i64),
    pub warnings: Vec<RangeWarning>,
}
