//! Validation of uploaded closet photos

use crate::config::StylistConfig;
use thiserror::Error;
use wardrobe_domain::{ImageMime, ImagePayload};

/// Filename used when an upload carries none
const FALLBACK_FILENAME: &str = "upload";

/// Limits applied to one batch of uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    /// Maximum number of files
    pub max_files: usize,
    /// Maximum size of one file in bytes
    pub max_file_bytes: usize,
}

impl UploadLimits {
    /// Limits taken from the configuration
    pub fn from_config(config: &StylistConfig) -> Self {
        Self {
            max_files: config.max_upload_files,
            max_file_bytes: config.max_upload_bytes(),
        }
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self::from_config(&StylistConfig::default())
    }
}

/// A file as received, before validation
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied name, if any
    pub filename: Option<String>,
    /// Declared media type
    pub content_type: Option<String>,
    /// Raw bytes
    pub data: Vec<u8>,
}

/// Rejected upload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// More files than the limit allows
    #[error("Too many files. Maximum allowed is {max}.")]
    TooManyFiles {
        /// File limit
        max: usize,
    },

    /// Media type missing or outside jpeg/png/webp
    #[error("Unsupported file type. Allowed types: image/jpeg, image/png, image/webp.")]
    UnsupportedType {
        /// Declared media type
        content_type: Option<String>,
    },

    /// File over the size limit
    #[error("File '{filename}' exceeds {max_mb}MB limit.")]
    TooLarge {
        /// Offending file
        filename: String,
        /// Limit in MiB
        max_mb: usize,
    },

    /// Zero-byte file
    #[error("File '{0}' is empty.")]
    Empty(String),
}

/// Check a batch of uploads and convert it into image payloads
///
/// Files are checked in order and the first failure is returned.
pub fn validate_uploads(
    files: Vec<UploadedFile>,
    limits: &UploadLimits,
) -> Result<Vec<ImagePayload>, UploadError> {
    if files.len() > limits.max_files {
        return Err(UploadError::TooManyFiles {
            max: limits.max_files,
        });
    }

    files
        .into_iter()
        .map(|file| {
            let mime = file
                .content_type
                .as_deref()
                .and_then(ImageMime::parse)
                .ok_or_else(|| UploadError::UnsupportedType {
                    content_type: file.content_type.clone(),
                })?;

            let filename = file
                .filename
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| FALLBACK_FILENAME.to_string());

            if file.data.len() > limits.max_file_bytes {
                return Err(UploadError::TooLarge {
                    filename,
                    max_mb: limits.max_file_bytes / (1024 * 1024),
                });
            }
            if file.data.is_empty() {
                return Err(UploadError::Empty(filename));
            }

            Ok(ImagePayload::new(filename, mime, file.data))
        })
        .collect()
}
