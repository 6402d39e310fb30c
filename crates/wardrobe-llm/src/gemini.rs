//! Gemini Client Implementation
//!
//! Calls the Gemini `generateContent` REST endpoint. Images are sent inline
//! as base64 parts after the prompt text. JSON output is requested through
//! `responseMimeType`, and the response schema is forwarded when supplied.
//!
//! This client never retries. Retrying is the caller's policy, and only for
//! malformed output, not for transport failures.
//!
//! # Examples
//!
//! ```no_run
//! use wardrobe_llm::GeminiClient;
//!
//! let client = GeminiClient::with_defaults("api-key", "gemini-2.0-flash").unwrap();
//! ```

use crate::{LlmError, ModelClient, ModelRequest, ModelResponse};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default timeout for one request (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini API client
pub struct GeminiClient {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    Inline {
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: &'static str,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    temperature: f32,
    response_mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a serde_json::Value>,
}

impl GeminiClient {
    /// Create a client
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingCredential`] when `api_key` is blank, or
    /// [`LlmError::Other`] if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingCredential);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            client,
        })
    }

    /// Create a client against the public endpoint with the default timeout
    pub fn with_defaults(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, LlmError> {
        Self::new(
            api_key,
            model,
            DEFAULT_ENDPOINT,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    fn build_body<'a>(request: &ModelRequest<'a>) -> GenerateContentRequest<'a> {
        let mut parts = Vec::with_capacity(1 + request.images.len());
        parts.push(RequestPart::Text {
            text: request.prompt,
        });
        for image in request.images {
            parts.push(RequestPart::Inline {
                inline_data: InlineData {
                    mime_type: image.mime.as_str(),
                    data: STANDARD.encode(&image.data),
                },
            });
        }

        GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts,
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type: "application/json",
                response_schema: request.response_schema,
            },
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn invoke(&self, request: &ModelRequest<'_>) -> Result<ModelResponse, LlmError> {
        let body = Self::build_body(request);

        debug!(
            model = %self.model,
            prompt_len = request.prompt.len(),
            images = request.images.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<ModelResponse>()
                .await
                .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)));
        }

        match status {
            reqwest::StatusCode::NOT_FOUND => Err(LlmError::ModelNotAvailable(self.model.clone())),
            reqwest::StatusCode::TOO_MANY_REQUESTS => Err(LlmError::RateLimitExceeded),
            _ => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(LlmError::Communication(format!(
                    "HTTP {}: {}",
                    status, error_text
                )))
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
