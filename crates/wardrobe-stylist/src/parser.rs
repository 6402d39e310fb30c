//! Parse model replies into validated results

use crate::error::StylistError;
use serde::de::DeserializeOwned;
use wardrobe_domain::Validate;
use wardrobe_llm::ModelResponse;

/// Pull the generated text out of a reply
///
/// Prefers the primary `text` field, then the first non-empty candidate
/// part. A reply with no text anywhere is a service error, not a format
/// error: there is nothing to retry against.
pub fn extract_text(response: &ModelResponse) -> Result<String, StylistError> {
    if let Some(text) = response.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(text.to_string());
    }

    response
        .candidates
        .iter()
        .filter_map(|candidate| candidate.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            StylistError::Service("Model returned an empty response body.".to_string())
        })
}

/// Parse `text` as JSON into `T` and check its invariants
///
/// A surrounding markdown code fence is stripped first. Every failure is a
/// [`StylistError::Format`].
pub fn parse_and_validate<T>(text: &str) -> Result<T, StylistError>
where
    T: DeserializeOwned + Validate,
{
    let body = strip_code_fence(text);

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| StylistError::Format(format!("JSON parse error: {}", e)))?;

    let parsed: T = serde_json::from_value(value)
        .map_err(|e| StylistError::Format(format!("Schema mismatch: {}", e)))?;

    parsed
        .validate()
        .map_err(|e| StylistError::Format(format!("Validation failed: {}", e)))?;

    Ok(parsed)
}

/// Strip a markdown code fence, with or without a language tag
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") on the opening fence line
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };

    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_domain::{ClosetAnalysisResult, ClothingCategory, OutfitGenerationResult};
    use wardrobe_llm::{Candidate, Content, Part};

    const ANALYSIS: &str = r#"{
        "summary": "Parsed 1 item",
        "items": [{
            "id": "i1",
            "name": "Linen Shirt",
            "category": "top",
            "color": "white",
            "formality": "casual",
            "seasonality": ["summer"]
        }]
    }"#;

    fn outfit_json(count: usize, pieces: usize, confidence: f64) -> String {
        let piece =
            r#"{"item_id": "a", "item_name": "A", "category": "top", "styling_note": ""}"#;
        let pieces = vec![piece; pieces].join(",");
        let outfit = format!(
            concat!(
                r#"{{"outfit_id": "o", "title": "T", "pieces": [{}], "#,
                r#""reasoning": "R", "confidence": {}}}"#
            ),
            pieces, confidence
        );
        format!(r#"{{"outfits": [{}], "global_tips": []}}"#, vec![outfit; count].join(","))
    }

    #[test]
    fn test_extract_primary_text() {
        let response = ModelResponse::from_text("  {\"a\": 1}  ");
        assert_eq!(extract_text(&response).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_candidate_fallback() {
        let response = ModelResponse {
            text: Some("   ".to_string()),
            candidates: vec![
                Candidate::default(),
                Candidate {
                    content: Some(Content {
                        parts: vec![Part { text: None }, Part { text: Some("{}".to_string()) }],
                        role: None,
                    }),
                    finish_reason: None,
                },
            ],
        };
        assert_eq!(extract_text(&response).unwrap(), "{}");
    }

    #[test]
    fn test_extract_empty_is_service_error() {
        let result = extract_text(&ModelResponse::empty());
        assert!(matches!(result, Err(StylistError::Service(_))));

        let blank = ModelResponse::from_candidate_text("  \n ");
        assert!(matches!(extract_text(&blank), Err(StylistError::Service(_))));
    }

    #[test]
    fn test_parse_valid_analysis() {
        let result: ClosetAnalysisResult = parse_and_validate(ANALYSIS).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].category, ClothingCategory::Top);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let fenced = format!("```json\n{}\n```", ANALYSIS);
        let result: ClosetAnalysisResult = parse_and_validate(&fenced).unwrap();
        assert_eq!(result.summary, "Parsed 1 item");

        let bare = format!("```\n{}\n```", ANALYSIS);
        assert!(parse_and_validate::<ClosetAnalysisResult>(&bare).is_ok());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_and_validate::<ClosetAnalysisResult>("This is not JSON");
        assert!(matches!(result, Err(StylistError::Format(_))));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let result = parse_and_validate::<ClosetAnalysisResult>(r#"[{"summary": "x"}]"#);
        assert!(matches!(result, Err(StylistError::Format(_))));
    }

    #[test]
    fn test_parse_unknown_enum_value() {
        let bad = ANALYSIS.replace("\"top\"", "\"swimwear\"");
        let result = parse_and_validate::<ClosetAnalysisResult>(&bad);
        assert!(matches!(result, Err(StylistError::Format(_))));
    }

    #[test]
    fn test_parse_outfit_invariants() {
        assert!(parse_and_validate::<OutfitGenerationResult>(&outfit_json(2, 2, 0.5)).is_ok());
        assert!(parse_and_validate::<OutfitGenerationResult>(&outfit_json(4, 3, 1.0)).is_ok());

        for bad in [
            outfit_json(1, 2, 0.5),
            outfit_json(5, 2, 0.5),
            outfit_json(3, 1, 0.5),
            outfit_json(3, 2, 1.2),
            outfit_json(3, 2, -0.1),
        ] {
            let result = parse_and_validate::<OutfitGenerationResult>(&bad);
            assert!(matches!(result, Err(StylistError::Format(_))), "accepted: {}", bad);
        }
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence(r#"{"key": "value"}"#), r#"{"key": "value"}"#);
        assert_eq!(strip_code_fence("```json\n{\"key\": 1}\n```"), "{\"key\": 1}");
        assert_eq!(strip_code_fence("```\n[1]\n```\n"), "[1]");
        assert_eq!(strip_code_fence("```json{\"k\": 2}```"), "{\"k\": 2}");
        // Unterminated fence still yields the body
        assert_eq!(strip_code_fence("```json\n{}"), "{}");
    }
}
