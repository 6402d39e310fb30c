//! Outfit suggestions and the request that produces them

use crate::item::ClosetItem;
use crate::validation::{Validate, ValidationError};
use crate::vocabulary::ClothingCategory;
use serde::{Deserialize, Serialize};

/// Minimum number of pieces in a valid outfit
pub const MIN_PIECES: usize = 2;

/// One closet item placed in an outfit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitPiece {
    /// Closet item identifier (should reference a supplied item; not enforced)
    pub item_id: String,

    /// Denormalized item name
    pub item_name: String,

    /// Item category
    pub category: ClothingCategory,

    /// How to wear this piece in the outfit
    pub styling_note: String,
}

impl OutfitPiece {
    /// Build a piece from a closet item
    pub fn from_item(item: &ClosetItem, styling_note: impl Into<String>) -> Self {
        Self {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            category: item.category,
            styling_note: styling_note.into(),
        }
    }
}

/// A proposed combination of closet items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    /// Outfit identifier
    pub outfit_id: String,

    /// Short title
    pub title: String,

    /// Pieces in wearing order
    pub pieces: Vec<OutfitPiece>,

    /// Why this outfit fits the occasion
    pub reasoning: String,

    /// Confidence in `[0, 1]`
    pub confidence: f64,

    /// Alternative swaps
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl Validate for OutfitSuggestion {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.pieces.len() < MIN_PIECES {
            return Err(ValidationError::TooFewPieces {
                outfit_id: self.outfit_id.clone(),
                count: self.pieces.len(),
                min: MIN_PIECES,
            });
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(ValidationError::ConfidenceOutOfRange {
                outfit_id: self.outfit_id.clone(),
                value: self.confidence,
            });
        }
        Ok(())
    }
}

/// Input to outfit generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOutfitsRequest {
    /// Closet to draw pieces from
    pub closet_items: Vec<ClosetItem>,

    /// Occasion, e.g. "wedding guest"
    pub occasion: String,

    /// Plan for the day
    pub itinerary: String,

    /// Optional style preferences
    #[serde(default)]
    pub preferences: Option<String>,
}

impl Validate for GenerateOutfitsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.closet_items.is_empty() {
            return Err(ValidationError::EmptyCloset);
        }
        if self.occasion.is_empty() {
            return Err(ValidationError::EmptyField("occasion"));
        }
        if self.itinerary.is_empty() {
            return Err(ValidationError::EmptyField("itinerary"));
        }
        self.closet_items.validate()
    }
}
