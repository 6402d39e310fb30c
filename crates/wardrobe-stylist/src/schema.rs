//! Response schemas sent with each model request
//!
//! Expressed in the OpenAPI subset Gemini accepts for `responseSchema`.
//! Enumerations and bounds are generated from the domain types so the schema
//! cannot drift from what the parser accepts.

use serde_json::{json, Value};
use wardrobe_domain::{
    ClothingCategory, Formality, Season, MAX_OUTFITS, MIN_OUTFITS, MIN_PIECES,
};

fn string() -> Value {
    json!({"type": "STRING"})
}

fn nullable_string() -> Value {
    json!({"type": "STRING", "nullable": true})
}

fn string_list() -> Value {
    json!({"type": "ARRAY", "items": string()})
}

fn string_enum(values: impl IntoIterator<Item = &'static str>) -> Value {
    json!({"type": "STRING", "enum": values.into_iter().collect::<Vec<_>>()})
}

fn category() -> Value {
    string_enum(ClothingCategory::ALL.iter().map(ClothingCategory::as_str))
}

fn closet_item() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "id": string(),
            "name": string(),
            "category": category(),
            "color": string(),
            "material": nullable_string(),
            "pattern": nullable_string(),
            "formality": string_enum(Formality::ALL.iter().map(Formality::as_str)),
            "seasonality": {
                "type": "ARRAY",
                "items": string_enum(Season::ALL.iter().map(Season::as_str)),
                "minItems": 1
            },
            "tags": string_list(),
            "notes": nullable_string()
        },
        "required": ["id", "name", "category", "color", "formality", "seasonality"],
        "propertyOrdering": [
            "id", "name", "category", "color", "material", "pattern",
            "formality", "seasonality", "tags", "notes"
        ]
    })
}

fn outfit_piece() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "item_id": string(),
            "item_name": string(),
            "category": category(),
            "styling_note": string()
        },
        "required": ["item_id", "item_name", "category", "styling_note"],
        "propertyOrdering": ["item_id", "item_name", "category", "styling_note"]
    })
}

fn outfit_suggestion() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "outfit_id": string(),
            "title": string(),
            "pieces": {
                "type": "ARRAY",
                "items": outfit_piece(),
                "minItems": MIN_PIECES
            },
            "reasoning": string(),
            "confidence": {"type": "NUMBER", "minimum": 0.0, "maximum": 1.0},
            "alternatives": string_list()
        },
        "required": ["outfit_id", "title", "pieces", "reasoning", "confidence"],
        "propertyOrdering": [
            "outfit_id", "title", "pieces", "reasoning", "confidence", "alternatives"
        ]
    })
}

/// Schema for a closet analysis reply
pub fn closet_analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": string(),
            "items": {"type": "ARRAY", "items": closet_item()},
            "warnings": string_list()
        },
        "required": ["summary", "items"],
        "propertyOrdering": ["summary", "items", "warnings"]
    })
}

/// Schema for an outfit generation reply
pub fn outfit_generation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "outfits": {
                "type": "ARRAY",
                "items": outfit_suggestion(),
                "minItems": MIN_OUTFITS,
                "maxItems": MAX_OUTFITS
            },
            "global_tips": string_list()
        },
        "required": ["outfits"],
        "propertyOrdering": ["outfits", "global_tips"]
    })
}
