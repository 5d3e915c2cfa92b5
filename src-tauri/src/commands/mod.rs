pub mod ai;
pub mod auth;
pub mod config;
pub mod diet;
pub mod health;
pub mod keychain;
pub mod profile;
pub mod progress;
pub mod state;
pub mod tracking;
