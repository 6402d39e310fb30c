//! Derived views handed back to callers alongside an analysis

use crate::item::ClosetItem;
use crate::vocabulary::ClothingCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which inputs an analysis was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    /// Photos only
    #[serde(rename = "images")]
    Images,
    /// Manual text only
    #[serde(rename = "manual_text")]
    ManualText,
    /// Both photos and manual text
    #[serde(rename = "images+manual_text")]
    ImagesAndManualText,
}

impl InputSource {
    /// Classify the inputs, or `None` when neither was supplied
    pub fn from_inputs(has_images: bool, has_manual_text: bool) -> Option<Self> {
        match (has_images, has_manual_text) {
            (true, true) => Some(InputSource::ImagesAndManualText),
            (true, false) => Some(InputSource::Images),
            (false, true) => Some(InputSource::ManualText),
            (false, false) => None,
        }
    }

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSource::Images => "images",
            InputSource::ManualText => "manual_text",
            InputSource::ImagesAndManualText => "images+manual_text",
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count items per category; every category is present, zeros included
pub fn category_counts(items: &[ClosetItem]) -> BTreeMap<ClothingCategory, usize> {
    let mut counts: BTreeMap<_, _> = ClothingCategory::ALL.into_iter().map(|c| (c, 0)).collect();
    for item in items {
        *counts.entry(item.category).or_insert(0) += 1;
    }
    counts
}
