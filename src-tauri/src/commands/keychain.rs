use keyring::Entry;
use tracing::{info, warn};

use crate::error::{NutriTrackError, Result};

/// Keychain service holding the Gemini API key.
pub const GEMINI_SERVICE: &str = "nutritrack-gemini-api";
/// Keychain service holding the Firebase web API key.
pub const FIREBASE_SERVICE: &str = "nutritrack-firebase-api";
const KEYCHAIN_USER: &str = "nutritrack";

const KNOWN_SERVICES: [&str; 2] = [GEMINI_SERVICE, FIREBASE_SERVICE];

fn entry(service: &str) -> Result<Entry> {
    if !KNOWN_SERVICES.contains(&service) {
        return Err(NutriTrackError::Config(format!(
            "Unknown key service '{}'",
            service
        )));
    }
    Entry::new(service, KEYCHAIN_USER).map_err(|e| {
        warn!("Failed to create keyring entry for {}: {}", service, e);
        e.into()
    })
}

/// Read a stored key, `None` when it was never set.
pub fn read_key(service: &str) -> Result<Option<String>> {
    match entry(service)?.get_password() {
        Ok(password) => Ok(Some(password)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => {
            warn!("Failed to get password for {}: {}", service, e);
            Err(e.into())
        }
    }
}

/// Read a key that must be configured before the caller can proceed.
pub fn require_key(service: &str, label: &str) -> Result<String> {
    read_key(service)?
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| NutriTrackError::Config(format!("{} API key is not set", label)))
}

#[tauri::command]
pub fn set_api_key(service: &str, key: &str) -> std::result::Result<(), String> {
    info!("Setting API key for service: {}", service);
    entry(service)?.set_password(key.trim()).map_err(|e| {
        warn!("Failed to set password for {}: {}", service, e);
        NutriTrackError::from(e).into()
    })
}

#[tauri::command]
pub fn get_api_key(service: &str) -> std::result::Result<Option<String>, String> {
    info!("Getting API key for service: {}", service);
    Ok(read_key(service)?)
}

#[tauri::command]
pub fn delete_api_key(service: &str) -> std::result::Result<(), String> {
    info!("Deleting API key for service: {}", service);
    match entry(service)?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => {
            warn!("Failed to delete credential for {}: {}", service, e);
            Err(NutriTrackError::from(e).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_service_rejected() {
        assert!(matches!(
            read_key("someone-elses-service"),
            Err(NutriTrackError::Config(_))
        ));
    }
}
