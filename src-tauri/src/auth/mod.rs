//! Email/password authentication against the Firebase Identity Toolkit.

pub mod client;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{NutriTrackError, Result};

pub use client::FirebaseAuthClient;

/// Provider failure categories with a fixed user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthErrorCode {
    ConfigurationNotFound,
    OperationNotAllowed,
    InvalidEmail,
    WeakPassword,
    EmailAlreadyInUse,
    InvalidCredential,
    TooManyRequests,
    NetworkRequestFailed,
    /// Anything else; carries the provider's raw code.
    Other(String),
}

impl AuthErrorCode {
    /// Map an Identity Toolkit error message such as `WEAK_PASSWORD : ...`.
    pub fn from_provider_code(raw: &str) -> Self {
        let code = raw.split(':').next().unwrap_or(raw).trim();
        match code {
            "CONFIGURATION_NOT_FOUND" => Self::ConfigurationNotFound,
            "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" => Self::OperationNotAllowed,
            "INVALID_EMAIL" | "MISSING_EMAIL" => Self::InvalidEmail,
            "WEAK_PASSWORD" => Self::WeakPassword,
            "EMAIL_EXISTS" => Self::EmailAlreadyInUse,
            "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "EMAIL_NOT_FOUND"
            | "USER_DISABLED" | "MISSING_PASSWORD" => Self::InvalidCredential,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyRequests,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn user_message(&self) -> Option<&'static str> {
        let message = match self {
            Self::ConfigurationNotFound => {
                "Email/Password sign-in is not enabled for this Firebase project. \
                 Enable it in Firebase Console → Authentication → Sign-in method."
            }
            Self::OperationNotAllowed => {
                "The selected auth provider is disabled in Firebase. Enable it in \
                 Authentication settings."
            }
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::WeakPassword => "Password must be at least 6 characters.",
            Self::EmailAlreadyInUse => "This email is already registered. Try logging in instead.",
            Self::InvalidCredential => {
                "Invalid credentials. Check your email and password and try again."
            }
            Self::TooManyRequests => "Too many attempts. Please wait a moment and try again.",
            Self::NetworkRequestFailed => {
                "Network error. Check your internet connection and try again."
            }
            Self::Other(_) => return None,
        };
        Some(message)
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::ConfigurationNotFound => "configuration-not-found",
            Self::OperationNotAllowed => "operation-not-allowed",
            Self::InvalidEmail => "invalid-email",
            Self::WeakPassword => "weak-password",
            Self::EmailAlreadyInUse => "email-already-in-use",
            Self::InvalidCredential => "invalid-credential",
            Self::TooManyRequests => "too-many-requests",
            Self::NetworkRequestFailed => "network-request-failed",
            Self::Other(raw) => raw.as_str(),
        };
        write!(f, "auth/{}", code)
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    pub email: String,
    pub password: String,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account returned by the provider after sign-up or sign-in.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthAccount {
    pub local_id: String,
    pub id_token: String,
    pub email: String,
}

impl From<AuthAccount> for Session {
    fn from(account: AuthAccount) -> Self {
        Session {
            token: account.id_token,
            user_id: account.local_id,
            email: account.email,
        }
    }
}

/// The three provider calls the app needs.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthAccount>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthAccount>;
    async fn update_display_name(&self, id_token: &str, name: &str) -> Result<()>;
}

fn require_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(NutriTrackError::validation(
            "Please enter your email and password.",
        ));
    }
    Ok(())
}

/// Create the account and set its display name.
///
/// The caller creates the user document afterwards.
pub async fn register(provider: &dyn AuthProvider, request: &SignupRequest) -> Result<Session> {
    require_credentials(&request.email, &request.password)?;
    if request.name.trim().is_empty() {
        return Err(NutriTrackError::validation("Please enter your name."));
    }

    let account = provider
        .sign_up(request.email.trim(), &request.password)
        .await?;
    provider
        .update_display_name(&account.id_token, request.name.trim())
        .await?;

    tracing::info!("Created account {}", account.local_id);
    Ok(account.into())
}

pub async fn login(provider: &dyn AuthProvider, request: &LoginRequest) -> Result<Session> {
    require_credentials(&request.email, &request.password)?;
    let account = provider
        .sign_in(request.email.trim(), &request.password)
        .await?;
    tracing::info!("Signed in {}", account.local_id);
    Ok(account.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_provider_codes_map() {
        assert_eq!(
            AuthErrorCode::from_provider_code("EMAIL_EXISTS"),
            AuthErrorCode::EmailAlreadyInUse
        );
        assert_eq!(
            AuthErrorCode::from_provider_code(
                "WEAK_PASSWORD : Password should be at least 6 characters"
            ),
            AuthErrorCode::WeakPassword
        );
        assert_eq!(
            AuthErrorCode::from_provider_code("INVALID_LOGIN_CREDENTIALS"),
            AuthErrorCode::InvalidCredential
        );
    }

    #[test]
    fn test_unmapped_code_keeps_provider_message() {
        let code = AuthErrorCode::from_provider_code("QUOTA_EXCEEDED");
        assert_eq!(code.user_message(), None);
        let err = NutriTrackError::Auth {
            code,
            message: "QUOTA_EXCEEDED".into(),
        };
        assert_eq!(err.user_message(), "QUOTA_EXCEEDED");
    }

    #[test]
    fn test_mapped_code_uses_fixed_message() {
        let err = NutriTrackError::Auth {
            code: AuthErrorCode::EmailAlreadyInUse,
            message: "EMAIL_EXISTS".into(),
        };
        assert!(err.user_message().contains("already registered"));
        assert_eq!(AuthErrorCode::EmailAlreadyInUse.to_string(), "auth/email-already-in-use");
    }

    #[derive(Default)]
    struct FakeProvider {
        display_names: Mutex<Vec<String>>,
    }

    fn account(email: &str) -> AuthAccount {
        AuthAccount {
            local_id: "uid-1".into(),
            id_token: "token-1".into(),
            email: email.into(),
        }
    }

    #[async_trait]
    impl AuthProvider for FakeProvider {
        async fn sign_up(&self, email: &str, _password: &str) -> Result<AuthAccount> {
            if email == "taken@example.com" {
                return Err(NutriTrackError::Auth {
                    code: AuthErrorCode::EmailAlreadyInUse,
                    message: "EMAIL_EXISTS".into(),
                });
            }
            Ok(account(email))
        }

        async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthAccount> {
            Ok(account(email))
        }

        async fn update_display_name(&self, _id_token: &str, name: &str) -> Result<()> {
            self.display_names.lock().unwrap().push(name.to_string());
            Ok(())
        }
    }

    fn signup_request(email: &str) -> SignupRequest {
        SignupRequest {
            name: " Ada ".into(),
            email: email.into(),
            password: "secret123".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_register_sets_display_name() {
        let provider = FakeProvider::default();
        let session = register(&provider, &signup_request("ada@example.com"))
            .await
            .unwrap();
        assert_eq!(session.user_id, "uid-1");
        assert_eq!(session.token, "token-1");
        assert_eq!(*provider.display_names.lock().unwrap(), vec!["Ada"]);
    }

    #[tokio::test]
    async fn test_register_surfaces_provider_error() {
        let provider = FakeProvider::default();
        let err = register(&provider, &signup_request("taken@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NutriTrackError::Auth {
                code: AuthErrorCode::EmailAlreadyInUse,
                ..
            }
        ));
        assert!(provider.display_names.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        let provider = FakeProvider::default();
        let err = login(
            &provider,
            &LoginRequest {
                email: "ada@example.com".into(),
                password: String::new(),
            },
        )
        .await
        .unwrap_err();
        assert!(err.is_validation());
    }
}
