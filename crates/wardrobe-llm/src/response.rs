//! Raw model response envelope
//!
//! Mirrors the shape of a `generateContent` reply closely enough to find the
//! generated text: an optional top-level `text` convenience field, then
//! `candidates[].content.parts[].text`. Everything else is ignored.

use serde::{Deserialize, Serialize};

/// Reply from a model invocation, before any text extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelResponse {
    /// Primary text, when the transport already flattened it
    #[serde(default)]
    pub text: Option<String>,

    /// Candidate completions
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate completion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,

    /// Why generation stopped (e.g. "STOP", "MAX_TOKENS")
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content of a candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,

    /// Producer role
    #[serde(default)]
    pub role: Option<String>,
}

/// One part of the content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part, absent for non-text parts
    #[serde(default)]
    pub text: Option<String>,
}

impl ModelResponse {
    /// Response carrying only the primary text field
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            candidates: Vec::new(),
        }
    }

    /// Response carrying text in a single candidate part
    pub fn from_candidate_text(text: impl Into<String>) -> Self {
        Self {
            text: None,
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: Some(text.into()),
                    }],
                    role: Some("model".to_string()),
                }),
                finish_reason: Some("STOP".to_string()),
            }],
        }
    }

    /// Response with no usable text anywhere
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_generate_content_reply() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "{\"outfits\": []}"}], "role": "model"},
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {"promptTokenCount": 10}
        }"#;
        let response: ModelResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text, None);
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
        let content = response.candidates[0].content.as_ref().unwrap();
        assert_eq!(content.parts[0].text.as_deref(), Some("{\"outfits\": []}"));
    }

    #[test]
    fn test_decode_blocked_reply() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: ModelResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response, ModelResponse::empty());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(ModelResponse::from_text("x").text.as_deref(), Some("x"));
        let response = ModelResponse::from_candidate_text("y");
        assert!(response.text.is_none());
        assert_eq!(response.candidates.len(), 1);
    }
}
