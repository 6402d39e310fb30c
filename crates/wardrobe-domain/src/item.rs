//! Closet item - one garment or accessory in a wardrobe

use crate::validation::{Validate, ValidationError};
use crate::vocabulary::{ClothingCategory, Formality, Season};
use serde::{Deserialize, Serialize};

/// A single wardrobe item
///
/// Field order is the serialized order; prompts embed closet items as JSON,
/// so reordering fields changes prompt bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetItem {
    /// Identifier, unique within one closet
    pub id: String,

    /// Display name
    pub name: String,

    /// Garment category
    pub category: ClothingCategory,

    /// Free-text color
    pub color: String,

    /// Optional material
    #[serde(default)]
    pub material: Option<String>,

    /// Optional pattern
    #[serde(default)]
    pub pattern: Option<String>,

    /// Formality level
    pub formality: Formality,

    /// Suitable seasons, order preserved
    pub seasonality: Vec<Season>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Optional notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for ClosetItem {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.seasonality.is_empty() {
            return Err(ValidationError::EmptySeasonality(self.id.clone()));
        }
        Ok(())
    }
}

/// Partial update for a closet item
///
/// `None` leaves the field untouched. Applying a patch builds a new item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosetItemPatch {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New category
    #[serde(default)]
    pub category: Option<ClothingCategory>,
    /// New color
    #[serde(default)]
    pub color: Option<String>,
    /// New material
    #[serde(default)]
    pub material: Option<String>,
    /// New pattern
    #[serde(default)]
    pub pattern: Option<String>,
    /// New formality
    #[serde(default)]
    pub formality: Option<Formality>,
    /// New seasons
    #[serde(default)]
    pub seasonality: Option<Vec<Season>>,
    /// New tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// New notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl ClosetItemPatch {
    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build a new item with the patched fields overridden
    pub fn apply(&self, item: &ClosetItem) -> Result<ClosetItem, ValidationError> {
        if matches!(&self.name, Some(name) if name.is_empty()) {
            return Err(ValidationError::EmptyField("name"));
        }
        if matches!(&self.color, Some(color) if color.is_empty()) {
            return Err(ValidationError::EmptyField("color"));
        }

        let updated = ClosetItem {
            id: item.id.clone(),
            name: self.name.clone().unwrap_or_else(|| item.name.clone()),
            category: self.category.unwrap_or(item.category),
            color: self.color.clone().unwrap_or_else(|| item.color.clone()),
            material: self.material.clone().or_else(|| item.material.clone()),
            pattern: self.pattern.clone().or_else(|| item.pattern.clone()),
            formality: self.formality.unwrap_or(item.formality),
            seasonality: self
                .seasonality
                .clone()
                .unwrap_or_else(|| item.seasonality.clone()),
            tags: self.tags.clone().unwrap_or_else(|| item.tags.clone()),
            notes: self.notes.clone().or_else(|| item.notes.clone()),
        };
        updated.validate()?;
        Ok(updated)
    }
}
