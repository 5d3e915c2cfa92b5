use serde_json::Value;

use crate::error::{NutriTrackError, Result};

/// Strip a surrounding markdown code fence (```json ... ```) from model output.
pub fn strip_markdown_json(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    // Drop the opening fence line, language tag included.
    let body = match trimmed.find('\n') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed.trim_start_matches('`'),
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim().to_string()
}

/// Strip fences and parse the reply as a JSON object.
pub fn parse_json_object(text: &str) -> Result<serde_json::Map<String, Value>> {
    let cleaned = strip_markdown_json(text);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(NutriTrackError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => {
            tracing::error!("Failed to parse model reply as JSON: {} (reply: {})", e, cleaned);
            Err(NutriTrackError::MalformedResponse(format!(
                "Invalid response format from API: {}",
                e
            )))
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fence() {
        let input = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_markdown_json(input), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_bare_fence() {
        assert_eq!(strip_markdown_json("```\n[1]\n```"), "[1]");
    }

    #[test]
    fn test_plain_text_trimmed() {
        assert_eq!(strip_markdown_json("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_unclosed_fence() {
        assert_eq!(strip_markdown_json("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_json_object_errors_are_malformed() {
        assert!(matches!(
            parse_json_object("not json"),
            Err(NutriTrackError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_json_object("[1, 2]"),
            Err(NutriTrackError::MalformedResponse(_))
        ));
        assert!(parse_json_object("```json\n{}\n```").unwrap().is_empty());
    }
}
