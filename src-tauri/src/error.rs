use thiserror::Error;

use crate::auth::AuthErrorCode;

#[derive(Debug, Error)]
pub enum NutriTrackError {
    #[error("{0}")]
    Validation(String),

    #[error("Authentication error ({code}): {message}")]
    Auth { code: AuthErrorCode, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No meal detected in the image")]
    NoMealDetected,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Not signed in")]
    NotSignedIn,
}

pub type Result<T> = std::result::Result<T, NutriTrackError>;

impl NutriTrackError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Text shown to the user for a failed action.
    ///
    /// Shape errors ask the user to try again; key and quota problems point at
    /// the configuration instead.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Auth { code, message } => code
                .user_message()
                .map(str::to_string)
                .unwrap_or_else(|| message.clone()),
            Self::Network(_) => {
                "Network error. Check your internet connection and try again.".to_string()
            }
            Self::Api(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("api key") || lower.contains("api_key") {
                    "Request rejected. Please check your Gemini API key in Settings.".to_string()
                } else if lower.contains("quota") {
                    "API quota exceeded. Please try again later.".to_string()
                } else {
                    format!("Request failed: {}", msg)
                }
            }
            Self::MalformedResponse(_) => {
                "Invalid response from the AI service. Please try again.".to_string()
            }
            Self::NoMealDetected => "No meal detected in the image or it does not match your \
                                     dietary preferences. Please upload a clear meal image."
                .to_string(),
            Self::Store(msg) => format!("Failed to access your data: {}", msg),
            Self::Keychain(msg) | Self::Config(msg) => {
                format!("{}. Please check your configuration in Settings.", msg)
            }
            Self::NotSignedIn => "Please log in to continue.".to_string(),
        }
    }

    /// True for failures caused by what the user typed.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<rusqlite::Error> for NutriTrackError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<keyring::Error> for NutriTrackError {
    fn from(err: keyring::Error) -> Self {
        Self::Keychain(err.to_string())
    }
}

impl From<NutriTrackError> for String {
    fn from(err: NutriTrackError) -> Self {
        err.user_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_transport_messages_differ() {
        let shape = NutriTrackError::MalformedResponse("missing dinner".into()).user_message();
        let network = NutriTrackError::Network("timeout".into()).user_message();
        assert!(shape.contains("try again"));
        assert!(network.contains("internet connection"));
        assert_ne!(shape, network);
    }

    #[test]
    fn test_api_key_errors_point_at_settings() {
        let err = NutriTrackError::Api("400 - API key not valid".into());
        assert!(err.user_message().contains("API key"));
        assert!(err.user_message().contains("Settings"));
    }

    #[test]
    fn test_quota_error_message() {
        let err = NutriTrackError::Api("429 - Quota exceeded for metric".into());
        assert!(err.user_message().contains("quota"));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = NutriTrackError::validation("Please enter a calorie goal.");
        assert!(err.is_validation());
        assert_eq!(String::from(err), "Please enter a calorie goal.");
    }
}
