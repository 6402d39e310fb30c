//! Configuration for the Stylist

use crate::error::StylistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for the Stylist
///
/// Loaded from TOML, then overridden from the environment. Missing fields
/// take their defaults, so an empty file is a valid mock-mode config.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylistConfig {
    /// Use the deterministic generator instead of calling a model
    pub mock_mode: bool,

    /// Model identifier
    pub model: String,

    /// API credential, required when `mock_mode` is off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL
    pub endpoint: String,

    /// Sampling temperature sent with every request
    pub temperature: f32,

    /// Transport timeout for one model call (seconds)
    pub request_timeout_secs: u64,

    /// Maximum size of one uploaded image (MiB)
    pub max_upload_mb: u64,

    /// Maximum number of uploaded images per request
    pub max_upload_files: usize,
}

impl Default for StylistConfig {
    /// Mock mode, 8 files of up to 8 MiB each
    fn default() -> Self {
        Self {
            mock_mode: true,
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            endpoint: wardrobe_llm::gemini::DEFAULT_ENDPOINT.to_string(),
            temperature: 0.0,
            request_timeout_secs: wardrobe_llm::gemini::DEFAULT_TIMEOUT_SECS,
            max_upload_mb: 8,
            max_upload_files: 8,
        }
    }
}

impl fmt::Debug for StylistConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StylistConfig")
            .field("mock_mode", &self.mock_mode)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("temperature", &self.temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_upload_mb", &self.max_upload_mb)
            .field("max_upload_files", &self.max_upload_files)
            .finish()
    }
}

impl StylistConfig {
    /// Mock-mode configuration
    pub fn mock() -> Self {
        Self::default()
    }

    /// Live configuration with the given credential and default model
    pub fn live(api_key: impl Into<String>) -> Self {
        Self {
            mock_mode: false,
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Maximum size of one uploaded image in bytes
    pub fn max_upload_bytes(&self) -> usize {
        usize::try_from(self.max_upload_mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX)
    }

    /// The credential, if one is set and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0 and 2".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.max_upload_mb == 0 {
            return Err("max_upload_mb must be greater than 0".to_string());
        }
        if self.max_upload_files == 0 {
            return Err("max_upload_files must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), StylistError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`
    ///
    /// Recognised keys: `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_MOCK_MODE`,
    /// `MAX_UPLOAD_MB`, `MAX_UPLOAD_FILES`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), StylistError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.model = model;
        }
        if let Some(raw) = lookup("GEMINI_MOCK_MODE") {
            self.mock_mode = parse_bool(&raw).ok_or_else(|| {
                StylistError::Config(format!("GEMINI_MOCK_MODE must be a boolean, got '{}'", raw))
            })?;
        }
        if let Some(raw) = lookup("MAX_UPLOAD_MB") {
            self.max_upload_mb = raw.trim().parse().map_err(|_| {
                StylistError::Config(format!("MAX_UPLOAD_MB must be an integer, got '{}'", raw))
            })?;
        }
        if let Some(raw) = lookup("MAX_UPLOAD_FILES") {
            self.max_upload_files = raw.trim().parse().map_err(|_| {
                StylistError::Config(format!("MAX_UPLOAD_FILES must be an integer, got '{}'", raw))
            })?;
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
