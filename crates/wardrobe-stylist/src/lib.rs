//! Wardrobe Stylist
//!
//! Turns a description of a closet (manual text, photos, or both) into
//! structured clothing items, and those items into outfit suggestions for an
//! occasion and itinerary.
//!
//! # Overview
//!
//! The Stylist is backed either by a live model or by a deterministic
//! rule-based generator. The choice is made once, at construction, from
//! [`StylistConfig`]. Both backends produce results that satisfy the same
//! invariants.
//!
//! # Architecture
//!
//! ```text
//! Inputs → Prompt → ModelClient → Parser/Validator → Result
//!                        ↑              │
//!                        └── retry once ┘  (format errors only)
//! ```
//!
//! # Example Usage
//!
//! ```
//! use wardrobe_stylist::{Stylist, StylistConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let stylist = Stylist::from_config(&StylistConfig::mock())?;
//!
//! let analysis = stylist
//!     .analyze_closet(Some("white tee, blue jeans, brown loafers"), &[])
//!     .await?;
//! assert_eq!(analysis.items.len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
pub mod mock;
pub mod parser;
pub mod prompt;
pub mod schema;
pub mod upload;

#[cfg(test)]
mod tests;

pub use config::{StylistConfig, DEFAULT_MODEL};
pub use engine::{Stylist, MAX_ATTEMPTS};
pub use error::StylistError;
pub use mock::MockStylist;
pub use upload::{validate_uploads, UploadError, UploadLimits, UploadedFile};
