use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use url::Url;

use super::{AuthAccount, AuthErrorCode, AuthProvider};
use crate::error::{NutriTrackError, Result};

pub const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    id_token: String,
    #[serde(default)]
    email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// REST client for the Identity Toolkit `accounts:*` endpoints.
pub struct FirebaseAuthClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FirebaseAuthClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| NutriTrackError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: IDENTITY_TOOLKIT_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn endpoint(&self, method: &str) -> Result<Url> {
        let raw = format!("{}/accounts:{}", self.base_url.trim_end_matches('/'), method);
        let mut url = Url::parse(&raw)
            .map_err(|e| NutriTrackError::Config(format!("Invalid auth endpoint '{}': {}", raw, e)))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn post(&self, method: &str, body: serde_json::Value) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint(method)?)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Auth request accounts:{} failed: {}", method, e);
                NutriTrackError::Auth {
                    code: AuthErrorCode::NetworkRequestFailed,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| NutriTrackError::Auth {
            code: AuthErrorCode::NetworkRequestFailed,
            message: e.to_string(),
        })?;

        if !status.is_success() {
            let err = provider_error(&text, status.as_u16());
            error!("Auth accounts:{} rejected: {}", method, err);
            return Err(err);
        }
        Ok(text)
    }

    async fn account_call(&self, method: &str, email: &str, password: &str) -> Result<AuthAccount> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let text = self.post(method, body).await?;
        parse_account(&text)
    }
}

fn parse_account(text: &str) -> Result<AuthAccount> {
    let account: AccountResponse = serde_json::from_str(text).map_err(|e| {
        NutriTrackError::MalformedResponse(format!("Unexpected auth response: {}", e))
    })?;
    Ok(AuthAccount {
        local_id: account.local_id,
        id_token: account.id_token,
        email: account.email,
    })
}

/// Turn an Identity Toolkit error body into an `Auth` error.
fn provider_error(body: &str, status: u16) -> NutriTrackError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| format!("HTTP {}", status));
    NutriTrackError::Auth {
        code: AuthErrorCode::from_provider_code(&message),
        message,
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuthClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthAccount> {
        self.account_call("signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthAccount> {
        self.account_call("signInWithPassword", email, password).await
    }

    async fn update_display_name(&self, id_token: &str, name: &str) -> Result<()> {
        let body = json!({
            "idToken": id_token,
            "displayName": name,
            "returnSecureToken": false,
        });
        self.post("update", body).await.map(|_| ())
    }
}
