//! Progress history, advice and achievement badges.

pub mod advice;
pub mod badges;
pub mod tracker;
pub mod types;

pub use advice::{CalorieAdvice, HealthAdvice, MealPlanAdherence};
pub use badges::{Badge, BadgeSet, Streaks};
pub use tracker::{weekly_window, ProgressTracker};
pub use types::*;
