//! Meal logging: the running log, weekly buckets and meal suggestions.

pub mod catalog;
pub mod log;
pub mod types;

pub use catalog::{default_catalog, search_suggestions, MealCatalog};
pub use log::MealLog;
pub use types::*;
