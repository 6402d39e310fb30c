//! Wardrobe Domain Layer
//!
//! Typed data shapes shared by the public API contract and the LLM response
//! contract. The same definitions are serialized into prompts, requested from
//! the model as a response schema, and returned to callers.
//!
//! ## Key Concepts
//!
//! - **Closet item**: one garment or accessory with category, color,
//!   formality and seasonality drawn from closed vocabularies
//! - **Outfit suggestion**: two or more closet items combined with a
//!   rationale and a confidence in `[0, 1]`
//! - **Envelopes**: [`ClosetAnalysisResult`] and [`OutfitGenerationResult`],
//!   the two shapes a model reply must satisfy
//!
//! Every value is validated on construction through [`Validate`] and never
//! mutated afterwards; updates build a new value (see [`ClosetItemPatch`]).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod envelope;
pub mod image;
pub mod item;
pub mod outfit;
pub mod record;
pub mod summary;
pub mod validation;
pub mod vocabulary;

// Re-exports for convenience
pub use envelope::{ClosetAnalysisResult, OutfitGenerationResult, MAX_OUTFITS, MIN_OUTFITS};
pub use image::{ImageMime, ImagePayload};
pub use item::{ClosetItem, ClosetItemPatch};
pub use outfit::{GenerateOutfitsRequest, OutfitPiece, OutfitSuggestion, MIN_PIECES};
pub use record::{to_generation_items, ClosetItemRecord, SavedOutfitRecord};
pub use summary::{category_counts, InputSource};
pub use validation::{Validate, ValidationError};
pub use vocabulary::{ClothingCategory, Formality, Season};
