//! Gemini `generateContent` REST client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

use super::{GenerationRequest, TextGenerator};
use crate::error::{NutriTrackError, Result};

pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;
const MAX_ERROR_BODY: usize = 1024;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

/// Production [`TextGenerator`] backed by the Gemini REST API.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: Option<&str>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| NutriTrackError::Config(format!("Failed to build HTTP client: {}", e)))?;
        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL)
            .to_string();
        Ok(Self {
            client,
            api_key: api_key.into(),
            model,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Point the client at another host. Used against local mock servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn endpoint(&self) -> Result<Url> {
        let raw = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| NutriTrackError::Config(format!("Invalid Gemini endpoint '{}': {}", raw, e)))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

fn build_body(request: &GenerationRequest) -> GeminiRequest {
    let mut parts = vec![Part::Text {
        text: request.prompt.clone(),
    }];
    if let Some(image) = &request.image {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data_base64.clone(),
            },
        });
    }
    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: request
            .temperature
            .map(|temperature| GenerationConfig { temperature }),
    }
}

/// Pull the first candidate's text out of a `generateContent` reply.
fn extract_text(body: &str) -> Result<String> {
    let response: GeminiResponse = serde_json::from_str(body).map_err(|e| {
        let msg = format!("Failed to parse Gemini response wrapper: {}", e);
        error!("{}", msg);
        NutriTrackError::MalformedResponse(msg)
    })?;

    let text: String = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| match part {
                    Part::Text { text } => Some(text),
                    Part::InlineData { .. } => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        error!("No text content in Gemini response");
        return Err(NutriTrackError::MalformedResponse(
            "No text content in Gemini response".to_string(),
        ));
    }
    Ok(text)
}

fn truncate_body(body: String) -> String {
    if body.chars().count() > MAX_ERROR_BODY {
        let head: String = body.chars().take(MAX_ERROR_BODY).collect();
        format!("{}...", head)
    } else {
        body
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let url = self.endpoint()?;
        info!(
            "Calling Gemini model {} (image: {})",
            self.model,
            request.image.is_some()
        );

        let response = self
            .client
            .post(url)
            .json(&build_body(request))
            .send()
            .await
            .map_err(|e| {
                let msg = if e.is_timeout() {
                    format!("Gemini API timeout after {}s", REQUEST_TIMEOUT_SECS)
                } else {
                    format!("Gemini API request failed: {}", e)
                };
                error!("{}", msg);
                NutriTrackError::Network(msg)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            NutriTrackError::Network(format!("Failed to read Gemini response body: {}", e))
        })?;

        if !status.is_success() {
            let msg = format!("{} - {}", status, truncate_body(body));
            error!("Gemini API error: {}", msg);
            return Err(NutriTrackError::Api(msg));
        }

        extract_text(&body)
    }
}
