//! Deterministic closet analysis and outfit generation
//!
//! Used when no live model is configured. Output is a pure function of the
//! input and satisfies the same invariants as a validated model reply.
//! Keyword lists, catalog entries and copy are fixed so outputs stay
//! comparable across releases.

use crate::error::StylistError;
use std::collections::HashMap;
use wardrobe_domain::{
    ClosetAnalysisResult, ClosetItem, ClothingCategory, Formality, GenerateOutfitsRequest,
    ImagePayload, OutfitGenerationResult, OutfitPiece, OutfitSuggestion, Season,
};

/// Maximum number of names taken from manual text
pub const MAX_MANUAL_ITEMS: usize = 20;

/// Manual item count below which the canned catalog is appended to image input
const CATALOG_THRESHOLD: usize = 4;

/// Category keywords, checked in order; the first match wins
const CATEGORY_KEYWORDS: &[(ClothingCategory, &[&str])] = &[
    (ClothingCategory::Top, &["shirt", "tee", "top", "blouse"]),
    (ClothingCategory::Bottom, &["pant", "jean", "skirt", "short"]),
    (ClothingCategory::Dress, &["dress"]),
    (ClothingCategory::Outerwear, &["jacket", "coat", "hoodie", "blazer"]),
    (ClothingCategory::Shoes, &["shoe", "sneaker", "boot", "loafer"]),
    (ClothingCategory::Accessory, &["watch", "belt", "bag", "hat", "ring"]),
];

/// Characters that end a line of manual text
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

const COLORS: &[&str] = &[
    "black", "white", "blue", "navy", "gray", "green", "red", "brown", "beige",
];

const COMBINED_INPUT_WARNING: &str =
    "Combined image and manual inputs. Verify color/details before wearing.";
const IMAGE_ONLY_WARNING: &str =
    "Image-only analysis may miss hidden details like material and fit.";

/// Rule-based stand-in for the model
#[derive(Debug, Clone, Copy, Default)]
pub struct MockStylist;

impl MockStylist {
    /// Create a mock stylist
    pub fn new() -> Self {
        Self
    }

    /// Derive closet items from manual text, padded with the canned catalog
    /// when images were supplied
    pub fn analyze_closet(
        &self,
        manual_text: Option<&str>,
        images: &[ImagePayload],
    ) -> ClosetAnalysisResult {
        let has_images = !images.is_empty();
        let has_manual_text = manual_text.is_some_and(|t| !t.trim().is_empty());

        let mut items: Vec<ClosetItem> = parse_manual_names(manual_text)
            .into_iter()
            .enumerate()
            .map(|(idx, name)| ClosetItem {
                id: format!("manual-{}", idx + 1),
                category: infer_category(&name),
                color: infer_color(&name).to_string(),
                name,
                material: None,
                pattern: None,
                formality: Formality::SmartCasual,
                seasonality: vec![Season::Spring, Season::Fall],
                tags: vec!["manual-input".to_string(), "mvp".to_string()],
                notes: None,
            })
            .collect();

        if has_images && items.len() < CATALOG_THRESHOLD {
            let start = items.len() + 1;
            items.extend(default_items(start));
        } else if items.is_empty() {
            items = default_items(1);
        }

        let mut warnings = Vec::new();
        if has_images && has_manual_text {
            warnings.push(COMBINED_INPUT_WARNING.to_string());
        } else if has_images {
            warnings.push(IMAGE_ONLY_WARNING.to_string());
        }

        ClosetAnalysisResult {
            summary: format!(
                "Parsed {} clothing items and grouped them for outfit planning.",
                items.len()
            ),
            items,
            warnings,
        }
    }

    /// Assemble three fixed outfits from the first item of each needed
    /// category, falling back to the first closet item
    pub fn generate_outfits(
        &self,
        request: &GenerateOutfitsRequest,
    ) -> Result<OutfitGenerationResult, StylistError> {
        let fallback = request
            .closet_items
            .first()
            .ok_or_else(|| {
                StylistError::InvalidRequest("At least one closet item is required".to_string())
            })?;

        let mut first_by_category: HashMap<ClothingCategory, &ClosetItem> = HashMap::new();
        for item in &request.closet_items {
            first_by_category.entry(item.category).or_insert(item);
        }
        let piece = |category: ClothingCategory, note: &str| {
            let item = first_by_category.get(&category).copied().unwrap_or(fallback);
            OutfitPiece::from_item(item, note)
        };

        let daytime = OutfitSuggestion {
            outfit_id: "outfit-1".to_string(),
            title: "Smart Daytime Core".to_string(),
            pieces: vec![
                piece(ClothingCategory::Top, "Use as the visual anchor."),
                piece(ClothingCategory::Bottom, "Keeps the look balanced and easy to move in."),
                piece(ClothingCategory::Shoes, "Comfort-first for itinerary walking."),
            ],
            reasoning: format!(
                "Built for a polished but comfortable day plan. It fits mixed indoor/outdoor \
                 transitions for '{}'.",
                request.occasion
            ),
            confidence: 0.86,
            alternatives: vec![
                "Swap shoes for a cleaner low-profile pair if your evening segment is dressier."
                    .to_string(),
                "Add a light outer layer if temperatures drop after sunset.".to_string(),
            ],
        };

        let layered = OutfitSuggestion {
            outfit_id: "outfit-2".to_string(),
            title: "Layered Versatile Option".to_string(),
            pieces: vec![
                piece(ClothingCategory::Top, "Base layer that works across activities."),
                piece(ClothingCategory::Outerwear, "Adds structure and weather flexibility."),
                piece(ClothingCategory::Bottom, "Neutral base to keep options open."),
                piece(ClothingCategory::Shoes, "Reliable for longer wear."),
            ],
            reasoning: "This option adapts well to schedule changes in the itinerary while \
                        staying cohesive."
                .to_string(),
            confidence: 0.82,
            alternatives: vec![
                "Replace outerwear with a cardigan for warmer conditions.".to_string(),
                "Add one accessory for a stronger personal style signal.".to_string(),
            ],
        };

        let evening = OutfitSuggestion {
            outfit_id: "outfit-3".to_string(),
            title: "Evening Lean-In".to_string(),
            pieces: vec![
                piece(ClothingCategory::Top, "Cleaner silhouette for evening photos."),
                piece(ClothingCategory::Bottom, "Maintains contrast and shape."),
                piece(ClothingCategory::Accessory, "Adds intentional styling detail."),
                piece(ClothingCategory::Shoes, "Completes the formality level."),
            ],
            reasoning: "A slightly elevated take suited for dinner or social stops while still \
                        using the same closet core."
                .to_string(),
            confidence: 0.79,
            alternatives: vec![
                "If comfort is priority, remove accessory and keep the daytime shoes.".to_string(),
                "Swap top for darker tone if the venue is more formal.".to_string(),
            ],
        };

        Ok(OutfitGenerationResult {
            outfits: vec![daytime, layered, evening],
            global_tips: vec![
                "Steam or lint-roll pieces before leaving to raise overall polish.".to_string(),
                "Pack one backup top if itinerary includes weather uncertainty.".to_string(),
            ],
        })
    }
}

/// Split manual text into item names
///
/// Semicolons, commas and line breaks separate names; surrounding spaces,
/// hyphens and tabs are trimmed; empties are dropped; at most
/// [`MAX_MANUAL_ITEMS`] names are kept.
pub fn parse_manual_names(manual_text: Option<&str>) -> Vec<String> {
    let Some(text) = manual_text else {
        return Vec::new();
    };

    text.split(|c: char| c == ';' || c == ',' || LINE_BREAKS.contains(&c))
        .map(|name| name.trim_matches([' ', '-', '\t']))
        .filter(|name| !name.is_empty())
        .take(MAX_MANUAL_ITEMS)
        .map(str::to_string)
        .collect()
}

/// Infer a category by case-insensitive keyword match
pub fn infer_category(name: &str) -> ClothingCategory {
    let lowered = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(ClothingCategory::Other)
}

/// Infer a color by case-insensitive substring match, or `"unknown"`
pub fn infer_color(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    COLORS
        .iter()
        .find(|color| lowered.contains(*color))
        .copied()
        .unwrap_or("unknown")
}

/// The canned five-item catalog with ids `mock-<start>` onwards
pub fn default_items(start: usize) -> Vec<ClosetItem> {
    let catalog: [(&str, ClothingCategory, &str, Option<&str>, Formality, &[Season], &str); 5] = [
        (
            "White Oxford Shirt",
            ClothingCategory::Top,
            "white",
            Some("cotton"),
            Formality::SmartCasual,
            &[Season::Spring, Season::Fall],
            "essential",
        ),
        (
            "Navy Chinos",
            ClothingCategory::Bottom,
            "navy",
            Some("cotton"),
            Formality::SmartCasual,
            &[Season::Spring, Season::Fall],
            "essential",
        ),
        (
            "Brown Loafers",
            ClothingCategory::Shoes,
            "brown",
            Some("leather"),
            Formality::Formal,
            &[Season::Spring, Season::Summer, Season::Fall],
            "essential",
        ),
        (
            "Charcoal Blazer",
            ClothingCategory::Outerwear,
            "gray",
            Some("wool-blend"),
            Formality::Formal,
            &[Season::Fall, Season::Winter],
            "layer",
        ),
        (
            "Silver Watch",
            ClothingCategory::Accessory,
            "silver",
            None,
            Formality::SmartCasual,
            &Season::ALL,
            "accessory",
        ),
    ];

    catalog
        .into_iter()
        .enumerate()
        .map(|(offset, (name, category, color, material, formality, seasons, tag))| ClosetItem {
            id: format!("mock-{}", start + offset),
            name: name.to_string(),
            category,
            color: color.to_string(),
            material: material.map(str::to_string),
            pattern: None,
            formality,
            seasonality: seasons.to_vec(),
            tags: vec!["mock".to_string(), tag.to_string()],
            notes: None,
        })
        .collect()
}
