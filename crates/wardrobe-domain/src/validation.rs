//! Structural and value constraints checked after deserialization

use thiserror::Error;

/// A value violated one of the contract invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field was empty
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// A closet item declared no season
    #[error("Closet item '{0}' must list at least one season")]
    EmptySeasonality(String),

    /// An outfit had fewer than the minimum number of pieces
    #[error("Outfit '{outfit_id}' has {count} pieces (min: {min})")]
    TooFewPieces {
        /// Offending outfit
        outfit_id: String,
        /// Pieces found
        count: usize,
        /// Minimum required
        min: usize,
    },

    /// An outfit confidence fell outside `[0, 1]` or was not finite
    #[error("Outfit '{outfit_id}' confidence {value} is outside [0, 1]")]
    ConfidenceOutOfRange {
        /// Offending outfit
        outfit_id: String,
        /// Reported confidence
        value: f64,
    },

    /// The outfit list size fell outside the allowed range
    #[error("Outfits must contain between {min} and {max} suggestions, got {count}")]
    OutfitCount {
        /// Outfits found
        count: usize,
        /// Lower bound
        min: usize,
        /// Upper bound
        max: usize,
    },

    /// A generation request carried no closet items
    #[error("At least one closet item is required")]
    EmptyCloset,
}

/// Types that check their own invariants
pub trait Validate {
    /// Check every invariant, returning the first violation
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.as_slice().validate()
    }
}
