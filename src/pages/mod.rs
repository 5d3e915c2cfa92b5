pub mod auth;
pub mod chat;
pub mod health;
pub mod home;
pub mod meal_planner;
pub mod profile;
pub mod progress_hub;
pub mod settings;
pub mod track_calories;

/// Form field text as a number; blank or unparsable input is `None`.
pub(crate) fn parse_number<T: std::str::FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}
