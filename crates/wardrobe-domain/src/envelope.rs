//! The two response envelopes a model reply must satisfy

use crate::item::ClosetItem;
use crate::outfit::OutfitSuggestion;
use crate::validation::{Validate, ValidationError};
use serde::{Deserialize, Serialize};

/// Fewest outfits a generation result may carry
pub const MIN_OUTFITS: usize = 2;

/// Most outfits a generation result may carry
pub const MAX_OUTFITS: usize = 4;

/// Result of turning photos or text into closet items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetAnalysisResult {
    /// One-line summary
    pub summary: String,

    /// Parsed items
    pub items: Vec<ClosetItem>,

    /// Caveats about the analysis
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl Validate for ClosetAnalysisResult {
    fn validate(&self) -> Result<(), ValidationError> {
        self.items.validate()
    }
}

/// Result of outfit generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitGenerationResult {
    /// Between [`MIN_OUTFITS`] and [`MAX_OUTFITS`] suggestions
    pub outfits: Vec<OutfitSuggestion>,

    /// Tips that apply to every outfit
    #[serde(default)]
    pub global_tips: Vec<String>,
}

impl OutfitGenerationResult {
    /// Construct a result, rejecting it if any invariant fails
    pub fn new(
        outfits: Vec<OutfitSuggestion>,
        global_tips: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let result = Self { outfits, global_tips };
        result.validate()?;
        Ok(result)
    }
}

impl Validate for OutfitGenerationResult {
    fn validate(&self) -> Result<(), ValidationError> {
        let count = self.outfits.len();
        if !(MIN_OUTFITS..=MAX_OUTFITS).contains(&count) {
            return Err(ValidationError::OutfitCount {
                count,
                min: MIN_OUTFITS,
                max: MAX_OUTFITS,
            });
        }
        self.outfits.validate()
    }
}
