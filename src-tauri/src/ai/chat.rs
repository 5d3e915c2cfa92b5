use super::prompts::assistant_prompt;
use super::{GenerationRequest, TextGenerator};
use crate::error::{NutriTrackError, Result};

pub const EMPTY_REPLY_FALLBACK: &str = "No valid response from NutriTrack AI.";

/// Ask the nutrition assistant a free-form question.
pub async fn ask_assistant(generator: &dyn TextGenerator, question: &str) -> Result<String> {
    let question = question.trim();
    if question.is_empty() {
        return Err(NutriTrackError::validation(
            "Please enter a question for the coach.",
        ));
    }

    match generator
        .generate(&GenerationRequest::text(assistant_prompt(question)))
        .await
    {
        Ok(reply) if !reply.trim().is_empty() => Ok(reply.trim().to_string()),
        Ok(_) | Err(NutriTrackError::MalformedResponse(_)) => {
            tracing::warn!("Assistant returned no text");
            Ok(EMPTY_REPLY_FALLBACK.to_string())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::fake::FakeGenerator;

    #[tokio::test]
    async fn test_reply_is_returned() {
        let generator = FakeGenerator::replying("  Eat more greens.  ");
        let reply = ask_assistant(&generator, "How do I get more fiber?")
            .await
            .unwrap();
        assert_eq!(reply, "Eat more greens.");
        assert!(generator
            .last_request()
            .unwrap()
            .prompt
            .contains("\"How do I get more fiber?\""));
    }

    #[tokio::test]
    async fn test_blank_question_rejected() {
        let generator = FakeGenerator::replying("unused");
        assert!(ask_assistant(&generator, "   ").await.unwrap_err().is_validation());
        assert!(generator.last_request().is_none());
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back() {
        let generator = FakeGenerator::replying("");
        assert_eq!(
            ask_assistant(&generator, "hi").await.unwrap(),
            EMPTY_REPLY_FALLBACK
        );
    }

    #[tokio::test]
    async fn test_network_error_propagates() {
        let generator = FakeGenerator::failing("offline");
        assert!(matches!(
            ask_assistant(&generator, "hi").await,
            Err(NutriTrackError::Network(_))
        ));
    }
}
