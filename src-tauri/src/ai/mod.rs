//! Generative-AI boundary: request shaping, the Gemini client and the
//! features built on it (meal photo analysis, chat assistant).

pub mod chat;
pub mod gemini;
pub mod image_prep;
pub mod json;
pub mod photo;
pub mod prompts;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

pub use chat::ask_assistant;
pub use gemini::GeminiClient;
pub use image_prep::prepare_meal_photo;
pub use json::strip_markdown_json;
pub use photo::{analyze_meal_photo, MealAnalysis};

/// Base64 image data sent alongside a prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineImage {
    pub mime_type: String,
    pub data_base64: String,
}

/// A single one-shot generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: Option<InlineImage>,
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }
}

/// Anything that turns a prompt into generated text.
///
/// Implementations return the raw model text. Transport failures map to
/// `Network`, non-success responses to `Api`, and a reply without text to
/// `MalformedResponse`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
