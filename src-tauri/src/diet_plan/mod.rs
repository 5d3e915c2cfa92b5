//! AI-generated daily meal plans and the grocery list built from them.

pub mod grocery;
pub mod planner;
pub mod types;

pub use grocery::{grocery_list, latest_plan, planned_total_calories};
pub use planner::{generate_plan, parse_diet_plan};
pub use types::*;
