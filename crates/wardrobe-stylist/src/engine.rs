//! Core Stylist implementation

use crate::config::StylistConfig;
use crate::error::StylistError;
use crate::mock::MockStylist;
use crate::parser::{extract_text, parse_and_validate};
use crate::prompt::{build_analysis_prompt, build_outfit_prompt};
use crate::schema::{closet_analysis_schema, outfit_generation_schema};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wardrobe_domain::{
    ClosetAnalysisResult, GenerateOutfitsRequest, ImagePayload, OutfitGenerationResult, Validate,
};
use wardrobe_llm::{GeminiClient, ModelClient, ModelRequest};

/// Attempts per request: the first call plus one retry on a format failure
pub const MAX_ATTEMPTS: u32 = 2;

/// Where results come from, fixed at construction
enum Backend {
    Mock(MockStylist),
    Live {
        client: Arc<dyn ModelClient>,
        analysis_schema: Value,
        outfit_schema: Value,
    },
}

/// Turns closet descriptions into structured items and items into outfits
///
/// Immutable after construction and safe to share behind an `Arc`.
pub struct Stylist {
    backend: Backend,
    temperature: f32,
}

impl fmt::Debug for Stylist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backend = match &self.backend {
            Backend::Mock(_) => "mock".to_string(),
            Backend::Live { client, .. } => format!("live({})", client.model_name()),
        };
        f.debug_struct("Stylist")
            .field("backend", &backend)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl Stylist {
    /// Create a Stylist from configuration
    ///
    /// Live mode builds a Gemini client and fails when no API key is set.
    pub fn from_config(config: &StylistConfig) -> Result<Self, StylistError> {
        config.validate().map_err(StylistError::Config)?;

        if config.mock_mode {
            info!("Stylist running in mock mode");
            return Ok(Self::mock().with_temperature(config.temperature));
        }

        let api_key = config.api_key().ok_or_else(|| {
            StylistError::Config(
                "GEMINI_API_KEY is required when GEMINI_MOCK_MODE=false.".to_string(),
            )
        })?;

        let client = GeminiClient::new(
            api_key,
            config.model.clone(),
            config.endpoint.clone(),
            config.request_timeout(),
        )
        .map_err(|e| StylistError::Config(e.to_string()))?;

        info!("Stylist using model '{}'", config.model);
        Ok(Self::with_client(Arc::new(client)).with_temperature(config.temperature))
    }

    /// Create a Stylist backed by the deterministic generator
    pub fn mock() -> Self {
        Self {
            backend: Backend::Mock(MockStylist::new()),
            temperature: 0.0,
        }
    }

    /// Create a Stylist backed by any model client
    pub fn with_client(client: Arc<dyn ModelClient>) -> Self {
        Self {
            backend: Backend::Live {
                client,
                analysis_schema: closet_analysis_schema(),
                outfit_schema: outfit_generation_schema(),
            },
            temperature: 0.0,
        }
    }

    /// Set the sampling temperature sent with live requests
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Whether results come from the deterministic generator
    pub fn is_mock(&self) -> bool {
        matches!(self.backend, Backend::Mock(_))
    }

    /// Analyze a closet from manual text, photos, or both
    ///
    /// At least one input is required. Images are sent to the model with the
    /// prompt.
    pub async fn analyze_closet(
        &self,
        manual_text: Option<&str>,
        images: &[ImagePayload],
    ) -> Result<ClosetAnalysisResult, StylistError> {
        let manual_text = manual_text.map(str::trim).filter(|t| !t.is_empty());
        if manual_text.is_none() && images.is_empty() {
            return Err(StylistError::InvalidRequest(
                "Provide at least one image or manual clothing text.".to_string(),
            ));
        }

        info!(
            "Analyzing closet: {} images, manual text {}",
            images.len(),
            if manual_text.is_some() { "present" } else { "absent" }
        );

        let result = match &self.backend {
            Backend::Mock(mock) => mock.analyze_closet(manual_text, images),
            Backend::Live {
                client,
                analysis_schema,
                ..
            } => {
                let prompt = build_analysis_prompt(manual_text);
                self.generate_with_retry(client.as_ref(), &prompt, images, analysis_schema)
                    .await?
            }
        };

        info!(
            "Closet analysis complete: {} items, {} warnings",
            result.items.len(),
            result.warnings.len()
        );
        Ok(result)
    }

    /// Generate outfit suggestions for an occasion and itinerary
    pub async fn generate_outfits(
        &self,
        request: &GenerateOutfitsRequest,
    ) -> Result<OutfitGenerationResult, StylistError> {
        request
            .validate()
            .map_err(|e| StylistError::InvalidRequest(e.to_string()))?;

        info!(
            "Generating outfits for '{}' from {} closet items",
            request.occasion,
            request.closet_items.len()
        );

        let result = match &self.backend {
            Backend::Mock(mock) => mock.generate_outfits(request)?,
            Backend::Live { client, outfit_schema, .. } => {
                let prompt = build_outfit_prompt(request);
                self.generate_with_retry(client.as_ref(), &prompt, &[], outfit_schema)
                    .await?
            }
        };

        info!("Generated {} outfits", result.outfits.len());
        Ok(result)
    }

    /// Run full invoke-and-parse cycles until one succeeds or a
    /// non-format error occurs, at most [`MAX_ATTEMPTS`] times
    async fn generate_with_retry<T>(
        &self,
        client: &dyn ModelClient,
        prompt: &str,
        images: &[ImagePayload],
        schema: &Value,
    ) -> Result<T, StylistError>
    where
        T: DeserializeOwned + Validate,
    {
        let request = ModelRequest {
            prompt,
            images,
            response_schema: Some(schema),
            temperature: self.temperature,
        };

        let mut attempt = 1;
        loop {
            match self.generate_once(client, &request).await {
                Ok(parsed) => return Ok(parsed),
                Err(e) if e.is_format() && attempt < MAX_ATTEMPTS => {
                    warn!(
                        "Attempt {}/{} returned invalid output, retrying: {}",
                        attempt, MAX_ATTEMPTS, e
                    );
                    attempt += 1;
                }
                Err(e) if e.is_format() => {
                    warn!("Giving up after {} attempts: {}", attempt, e);
                    return Err(StylistError::ResponseFormat {
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn generate_once<T>(
        &self,
        client: &dyn ModelClient,
        request: &ModelRequest<'_>,
    ) -> Result<T, StylistError>
    where
        T: DeserializeOwned + Validate,
    {
        debug!(
            "Calling model '{}': prompt length {} chars, {} images",
            client.model_name(),
            request.prompt.len(),
            request.images.len()
        );

        let response = client.invoke(request).await?;
        let text = extract_text(&response)?;

        debug!("Model response length: {} chars", text.len());

        parse_and_validate(&text)
    }
}
