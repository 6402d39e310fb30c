//! Persisted shapes owned by the data store
//!
//! Records extend the transient values with an owner, storage location and
//! timestamps. They are decoded from the store's JSON rows and mapped back
//! into [`ClosetItem`] before reaching outfit generation.

use crate::item::ClosetItem;
use crate::outfit::OutfitSuggestion;
use crate::vocabulary::{ClothingCategory, Formality, Season};
use serde::{Deserialize, Serialize};

/// A closet item row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetItemRecord {
    /// Row identifier
    pub id: String,
    /// Owner
    pub user_id: String,
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
    /// Suitable seasons
    pub seasonality: Vec<Season>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Object store path of the item photo
    #[serde(default)]
    pub image_path: Option<String>,
    /// MIME type of the item photo
    #[serde(default)]
    pub image_mime_type: Option<String>,
    /// Signed URL for the item photo
    #[serde(default)]
    pub image_url: Option<String>,
    /// RFC 3339 creation time
    pub created_at: String,
    /// RFC 3339 last update time
    pub updated_at: String,
}

impl ClosetItemRecord {
    /// Map the row into the shape used for generation
    pub fn to_closet_item(&self) -> ClosetItem {
        ClosetItem {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category,
            color: self.color.clone(),
            material: self.material.clone(),
            pattern: self.pattern.clone(),
            formality: self.formality,
            seasonality: self.seasonality.clone(),
            tags: self.tags.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Map stored rows into generation input, preserving order
pub fn to_generation_items(records: &[ClosetItemRecord]) -> Vec<ClosetItem> {
    records.iter().map(ClosetItemRecord::to_closet_item).collect()
}

/// A saved outfit row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedOutfitRecord {
    /// Row identifier
    pub id: String,
    /// Owner
    pub user_id: String,
    /// Optional user-supplied title
    #[serde(default)]
    pub title: Option<String>,
    /// Occasion the outfit was generated for
    pub occasion: String,
    /// Itinerary the outfit was generated for
    pub itinerary: String,
    /// The outfit as generated
    pub outfit_snapshot: OutfitSuggestion,
    /// Tips returned alongside the outfit
    #[serde(default)]
    pub global_tips: Vec<String>,
    /// RFC 3339 creation time
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"{
        "id": "3f1c",
        "user_id": "user-9",
        "name": "Denim Jacket",
        "category": "outerwear",
        "color": "blue",
        "material": "denim",
        "pattern": null,
        "formality": "casual",
        "seasonality": ["spring", "fall"],
        "tags": ["layer"],
        "notes": null,
        "image_path": "user-9/3f1c/primary.jpg",
        "image_mime_type": "image/jpeg",
        "created_at": "2025-03-01T10:00:00Z",
        "updated_at": "2025-03-02T10:00:00Z"
    }"#;

    #[test]
    fn test_record_maps_to_item() {
        let record: ClosetItemRecord = serde_json::from_str(ROW).unwrap();
        assert_eq!(record.image_url, None);

        let item = record.to_closet_item();
        assert_eq!(item.id, "3f1c");
        assert_eq!(item.category, ClothingCategory::Outerwear);
        assert_eq!(item.material.as_deref(), Some("denim"));
        assert_eq!(item.seasonality, vec![Season::Spring, Season::Fall]);
        assert_eq!(item.tags, vec!["layer".to_string()]);
    }

    #[test]
    fn test_generation_items_preserve_order() {
        let first: ClosetItemRecord = serde_json::from_str(ROW).unwrap();
        let mut second = first.clone();
        second.id = "9a0b".to_string();

        let items = to_generation_items(&[second, first]);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["9a0b", "3f1c"]);
    }

    #[test]
    fn test_saved_outfit_decodes() {
        let json = r#"{
            "id": "s1",
            "user_id": "user-9",
            "title": null,
            "occasion": "Dinner",
            "itinerary": "Restaurant",
            "outfit_snapshot": {
                "outfit_id": "outfit-1",
                "title": "Evening",
                "pieces": [
                    {"item_id": "a", "item_name": "Shirt", "category": "top", "styling_note": ""},
                    {"item_id": "b", "item_name": "Boots", "category": "shoes", "styling_note": ""}
                ],
                "reasoning": "Works",
                "confidence": 0.7
            },
            "created_at": "2025-03-01T10:00:00Z"
        }"#;
        let record: SavedOutfitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.outfit_snapshot.pieces.len(), 2);
        assert!(record.global_tips.is_empty());
        assert!(record.outfit_snapshot.alternatives.is_empty());
    }
}
