//! Closed vocabularies for categories, formality levels and seasons
//!
//! Any value outside these sets is rejected when deserializing, which is how
//! model output with an invented category surfaces as a format error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Garment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    /// Shirts, tees, blouses
    Top,
    /// Pants, jeans, skirts, shorts
    Bottom,
    /// Dresses
    Dress,
    /// Jackets, coats, hoodies, blazers
    Outerwear,
    /// Shoes of any kind
    Shoes,
    /// Watches, belts, bags, hats, jewellery
    Accessory,
    /// Anything else
    Other,
}

impl ClothingCategory {
    /// Every category in declaration order
    pub const ALL: [ClothingCategory; 7] = [
        ClothingCategory::Top,
        ClothingCategory::Bottom,
        ClothingCategory::Dress,
        ClothingCategory::Outerwear,
        ClothingCategory::Shoes,
        ClothingCategory::Accessory,
        ClothingCategory::Other,
    ];

    /// Get the category name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingCategory::Top => "top",
            ClothingCategory::Bottom => "bottom",
            ClothingCategory::Dress => "dress",
            ClothingCategory::Outerwear => "outerwear",
            ClothingCategory::Shoes => "shoes",
            ClothingCategory::Accessory => "accessory",
            ClothingCategory::Other => "other",
        }
    }

    /// Parse a category from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// How dressed-up an item reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    /// Everyday wear
    Casual,
    /// Between casual and formal
    SmartCasual,
    /// Formal wear
    Formal,
    /// Sport-inspired everyday wear
    Athleisure,
    /// Could not be determined
    Unknown,
}

impl Formality {
    /// Every formality level in declaration order
    pub const ALL: [Formality; 5] = [
        Formality::Casual,
        Formality::SmartCasual,
        Formality::Formal,
        Formality::Athleisure,
        Formality::Unknown,
    ];

    /// Get the formality name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::SmartCasual => "smart-casual",
            Formality::Formal => "formal",
            Formality::Athleisure => "athleisure",
            Formality::Unknown => "unknown",
        }
    }

    /// Parse a formality level from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

/// Season an item is suitable for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Spring
    Spring,
    /// Summer
    Summer,
    /// Fall
    Fall,
    /// Winter
    Winter,
}

impl Season {
    /// Every season in declaration order
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Get the season name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// Parse a season from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|season| season.as_str() == s)
    }
}

macro_rules! wire_name_impls {
    ($($ty:ident => $label:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::parse(s).ok_or_else(|| format!("Invalid {}: {}", $label, s))
                }
            }
        )*
    };
}

wire_name_impls! {
    ClothingCategory => "category",
    Formality => "formality",
    Season => "season",
}
