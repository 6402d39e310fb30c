//! Wardrobe Model Client Layer
//!
//! Pluggable model clients behind a single capability: send a prompt (and
//! optionally images) and get the raw reply back.
//!
//! # Clients
//!
//! - `GeminiClient`: Gemini `generateContent` over HTTPS
//! - `ScriptedClient`: Deterministic scripted replies for testing
//!
//! Callers depend only on [`ModelClient`]; which variant is active is decided
//! once, when the caller is constructed.
//!
//! # Examples
//!
//! ```
//! use wardrobe_llm::{ModelClient, ModelRequest, ScriptedClient};
//!
//! # async fn example() {
//! let client = ScriptedClient::new(r#"{"summary": "", "items": []}"#);
//! let response = client.invoke(&ModelRequest::text("prompt")).await.unwrap();
//! assert!(response.text.is_some());
//! assert_eq!(client.call_count(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod response;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use wardrobe_domain::ImagePayload;

pub use gemini::GeminiClient;
pub use response::{Candidate, Content, ModelResponse, Part};

/// Errors that can occur while invoking a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Reply envelope could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API credential configured
    #[error("Missing API credential")]
    MissingCredential,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// One model invocation
#[derive(Debug, Clone, Copy)]
pub struct ModelRequest<'a> {
    /// Full prompt text
    pub prompt: &'a str,

    /// Images sent alongside the prompt
    pub images: &'a [ImagePayload],

    /// JSON schema the reply should follow, if the model supports it
    pub response_schema: Option<&'a serde_json::Value>,

    /// Sampling temperature
    pub temperature: f32,
}

impl<'a> ModelRequest<'a> {
    /// Text-only request with no schema at temperature 0
    pub fn text(prompt: &'a str) -> Self {
        Self {
            prompt,
            images: &[],
            response_schema: None,
            temperature: 0.0,
        }
    }
}

/// Capability every model client provides
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one request and return the raw reply
    async fn invoke(&self, request: &ModelRequest<'_>) -> Result<ModelResponse, LlmError>;

    /// Model identifier, for logs
    fn model_name(&self) -> &str;
}

/// What a [`ScriptedClient`] saw on one call
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Prompt text
    pub prompt: String,
    /// Number of images attached
    pub image_count: usize,
    /// Whether a response schema was attached
    pub has_schema: bool,
}

/// Scripted model client for deterministic testing
///
/// Replies are taken from the script in order; once the script runs out the
/// default reply is returned. Clones share the script and call history.
///
/// # Examples
///
/// ```
/// use wardrobe_llm::{LlmError, ModelClient, ModelRequest, ScriptedClient};
///
/// # async fn example() {
/// let client = ScriptedClient::new("fallback");
/// client.push_text("first");
/// client.push_error(LlmError::RateLimitExceeded);
///
/// let request = ModelRequest::text("prompt");
/// assert_eq!(client.invoke(&request).await.unwrap().text.as_deref(), Some("first"));
/// assert!(client.invoke(&request).await.is_err());
/// assert_eq!(client.invoke(&request).await.unwrap().text.as_deref(), Some("fallback"));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedClient {
    default_response: ModelResponse,
    script: Arc<Mutex<VecDeque<Result<ModelResponse, LlmError>>>>,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ScriptedClient {
    /// Create a client whose default reply carries `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_default(ModelResponse::from_text(text))
    }

    /// Create a client with an arbitrary default reply
    pub fn with_default(response: ModelResponse) -> Self {
        Self {
            default_response: response,
            script: Arc::new(Mutex::new(VecDeque::new())),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a reply carrying `text`
    pub fn push_text(&self, text: impl Into<String>) {
        self.push_response(ModelResponse::from_text(text));
    }

    /// Queue an arbitrary reply
    pub fn push_response(&self, response: ModelResponse) {
        lock(&self.script).push_back(Ok(response));
    }

    /// Queue an error
    pub fn push_error(&self, error: LlmError) {
        lock(&self.script).push_back(Err(error));
    }

    /// Number of invocations so far
    pub fn call_count(&self) -> usize {
        lock(&self.invocations).len()
    }

    /// Every invocation so far, oldest first
    pub fn invocations(&self) -> Vec<Invocation> {
        lock(&self.invocations).clone()
    }

    /// Forget recorded invocations
    pub fn reset_call_count(&self) {
        lock(&self.invocations).clear();
    }
}

impl Default for ScriptedClient {
    fn default() -> Self {
        Self::new("Default scripted response")
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn invoke(&self, request: &ModelRequest<'_>) -> Result<ModelResponse, LlmError> {
        lock(&self.invocations).push(Invocation {
            prompt: request.prompt.to_string(),
            image_count: request.images.len(),
            has_schema: request.response_schema.is_some(),
        });

        let next = lock(&self.script).pop_front();
        next.unwrap_or_else(|| Ok(self.default_response.clone()))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_domain::ImageMime;

    #[tokio::test]
    async fn test_scripted_client_default() {
        let client = ScriptedClient::new("Test response");
        let result = client.invoke(&ModelRequest::text("any prompt")).await;
        assert_eq!(result.unwrap().text.as_deref(), Some("Test response"));
    }

    #[tokio::test]
    async fn test_scripted_client_order() {
        let client = ScriptedClient::default();
        client.push_text("one");
        client.push_response(ModelResponse::empty());
        client.push_error(LlmError::Communication("down".to_string()));

        let request = ModelRequest::text("p");
        assert_eq!(client.invoke(&request).await.unwrap().text.as_deref(), Some("one"));
        assert_eq!(client.invoke(&request).await.unwrap(), ModelResponse::empty());
        assert!(matches!(
            client.invoke(&request).await,
            Err(LlmError::Communication(_))
        ));
        assert_eq!(
            client.invoke(&request).await.unwrap().text.as_deref(),
            Some("Default scripted response")
        );
    }

    #[tokio::test]
    async fn test_scripted_client_records_invocations() {
        let client = ScriptedClient::new("ok");
        let images = vec![ImagePayload::new("a.png", ImageMime::Png, vec![1, 2, 3])];
        let schema = serde_json::json!({"type": "OBJECT"});

        client.invoke(&ModelRequest::text("first")).await.unwrap();
        client
            .invoke(&ModelRequest {
                prompt: "second",
                images: &images,
                response_schema: Some(&schema),
                temperature: 0.0,
            })
            .await
            .unwrap();

        assert_eq!(client.call_count(), 2);
        let calls = client.invocations();
        assert_eq!(calls[0].prompt, "first");
        assert_eq!(calls[0].image_count, 0);
        assert!(!calls[0].has_schema);
        assert_eq!(calls[1].image_count, 1);
        assert!(calls[1].has_schema);

        client.reset_call_count();
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_scripted_client_clone_shares_state() {
        let client1 = ScriptedClient::new("test");
        let client2 = client1.clone();

        client1.invoke(&ModelRequest::text("p")).await.unwrap();

        assert_eq!(client1.call_count(), 1);
        assert_eq!(client2.call_count(), 1);
    }
}
