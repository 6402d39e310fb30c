//! Uploaded image payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted image MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageMime {
    /// `image/jpeg`
    #[serde(rename = "image/jpeg")]
    Jpeg,
    /// `image/png`
    #[serde(rename = "image/png")]
    Png,
    /// `image/webp`
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageMime {
    /// Every accepted type
    pub const ALL: [ImageMime; 3] = [ImageMime::Jpeg, ImageMime::Png, ImageMime::Webp];

    /// MIME type string
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
            ImageMime::Webp => "image/webp",
        }
    }

    /// Parse a MIME type string, ignoring parameters and case
    pub fn parse(s: &str) -> Option<Self> {
        let essence = s.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|m| m.as_str() == essence)
    }

    /// Guess the type from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageMime::Jpeg),
            "png" => Some(ImageMime::Png),
            "webp" => Some(ImageMime::Webp),
            _ => None,
        }
    }

    /// Canonical file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "jpg",
            ImageMime::Png => "png",
            ImageMime::Webp => "webp",
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image already checked for size, type and count
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Original file name
    pub filename: String,
    /// Image type
    pub mime: ImageMime,
    /// Raw bytes
    pub data: Vec<u8>,
}

impl ImagePayload {
    /// Create a payload
    pub fn new(filename: impl Into<String>, mime: ImageMime, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime,
            data,
        }
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("filename", &self.filename)
            .field("mime", &self.mime)
            .field("bytes", &self.data.len())
            .finish()
    }
}
