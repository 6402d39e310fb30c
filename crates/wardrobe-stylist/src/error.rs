//! Error types for the Stylist

use crate::upload::UploadError;
use thiserror::Error;
use wardrobe_llm::LlmError;

/// Errors that can occur while analyzing a closet or generating outfits
///
/// Callers map these to transport status codes. The split that matters is
/// between [`StylistError::Service`] (upstream trouble, never retried) and the
/// two format variants (the model answered, but not in the requested shape).
#[derive(Error, Debug)]
pub enum StylistError {
    /// Misconfiguration detected at construction
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller input rejected before any work was done
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Uploaded image rejected
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Upstream failure unrelated to output shape
    #[error("Model service error: {0}")]
    Service(String),

    /// Output of one attempt failed to parse or validate
    #[error("Invalid model output: {0}")]
    Format(String),

    /// Output still failed to parse or validate after the retry
    #[error("Model returned invalid structured JSON after {attempts} attempts: {source}")]
    ResponseFormat {
        /// Attempts made
        attempts: u32,
        /// Failure of the last attempt
        #[source]
        source: Box<StylistError>,
    },
}

impl StylistError {
    /// Whether this is a single-attempt format failure, the only retried kind
    pub fn is_format(&self) -> bool {
        matches!(self, StylistError::Format(_))
    }
}

impl From<LlmError> for StylistError {
    fn from(e: LlmError) -> Self {
        StylistError::Service(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_only_format_is_retryable() {
        assert!(StylistError::Format("bad".into()).is_format());
        assert!(!StylistError::Service("down".into()).is_format());
        assert!(!StylistError::Config("missing".into()).is_format());
        let terminal = StylistError::ResponseFormat {
            attempts: 2,
            source: Box::new(StylistError::Format("bad".into())),
        };
        assert!(!terminal.is_format());
    }

    #[test]
    fn test_terminal_error_keeps_source() {
        let terminal = StylistError::ResponseFormat {
            attempts: 2,
            source: Box::new(StylistError::Format("trailing comma".into())),
        };
        let message = terminal.to_string();
        assert!(message.contains("after 2 attempts"));
        assert!(message.contains("trailing comma"));
        assert!(terminal.source().is_some());
    }

    #[test]
    fn test_upload_errors_convert_transparently() {
        let error: StylistError = UploadError::TooManyFiles { max: 5 }.into();
        assert!(matches!(
            error,
            StylistError::Upload(UploadError::TooManyFiles { max: 5 })
        ));
        assert_eq!(error.to_string(), "Too many files. Maximum allowed is 5.");
        assert!(!error.is_format());
    }

    #[test]
    fn test_llm_errors_are_service_errors() {
        let error: StylistError = LlmError::RateLimitExceeded.into();
        assert!(matches!(error, StylistError::Service(_)));
    }
}
