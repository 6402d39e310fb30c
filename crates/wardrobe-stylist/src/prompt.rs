//! Prompt construction for closet analysis and outfit generation
//!
//! Both builders are pure: identical input yields byte-identical prompts, so
//! prompts can be pinned by golden tests and replayed against the model.

use serde::Serialize;
use std::io;
use wardrobe_domain::{
    ClosetItem, ClothingCategory, Formality, GenerateOutfitsRequest, Season, MAX_OUTFITS,
    MIN_OUTFITS, MIN_PIECES,
};

/// Marker used when an optional context field is absent
pub const NONE_MARKER: &str = "<none>";

/// Prefix of the context line carrying the serialized closet
pub const CLOSET_JSON_PREFIX: &str = "closet_items_json: ";

const ANALYZE_CLOSET_INSTRUCTIONS: &str = r#"You are a wardrobe parser.
Return JSON only matching the schema exactly.
No markdown. No extra keys.
Infer sensible categories/formality/seasonality from the provided inputs."#;

const GENERATE_OUTFITS_INSTRUCTIONS: &str = r#"You are an outfit planner.
Return JSON only matching the schema exactly.
No markdown. No extra keys.
Generate practical outfit combinations based on closet items, occasion, and itinerary."#;

/// Build the closet analysis prompt
///
/// The manual text is trimmed and embedded verbatim, or replaced by
/// [`NONE_MARKER`] when absent or blank.
pub fn build_analysis_prompt(manual_text: Option<&str>) -> String {
    let manual_section = manual_text.map(str::trim).filter(|t| !t.is_empty());

    let mut prompt = String::new();
    prompt.push_str(ANALYZE_CLOSET_INSTRUCTIONS);
    prompt.push('\n');
    prompt.push_str(&vocabulary_rules());
    prompt.push_str("\n\n");

    prompt.push_str("Context:\n");
    prompt.push_str("manual_clothes_text:\n");
    prompt.push_str(manual_section.unwrap_or(NONE_MARKER));
    prompt.push('\n');
    prompt.push_str(
        "If images are included, combine both sources and deduplicate obvious repeats.",
    );
    prompt
}

/// Build the outfit generation prompt
///
/// The closet is embedded as a single-line JSON array on the
/// [`CLOSET_JSON_PREFIX`] line, with non-ASCII characters escaped.
pub fn build_outfit_prompt(request: &GenerateOutfitsRequest) -> String {
    let preferences = request
        .preferences
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(NONE_MARKER);

    let mut prompt = String::new();
    prompt.push_str(GENERATE_OUTFITS_INSTRUCTIONS);
    prompt.push('\n');
    prompt.push_str(&vocabulary_rules());
    prompt.push_str("\n\n");

    prompt.push_str("Context:\n");
    prompt.push_str(&format!("occasion: {}\n", request.occasion));
    prompt.push_str(&format!("itinerary: {}\n", request.itinerary));
    prompt.push_str(&format!("preferences: {}\n", preferences));
    prompt.push_str(CLOSET_JSON_PREFIX);
    prompt.push_str(&closet_items_json(&request.closet_items));
    prompt.push('\n');

    prompt.push_str(&format!(
        "Constraints: return {} to {} outfits, each with at least {} pieces, \
         confidence between 0 and 1, and concise reasoning.\n",
        MIN_OUTFITS, MAX_OUTFITS, MIN_PIECES
    ));
    prompt.push_str("Every piece item_id must be the id of one of the closet items above.\n");
    prompt.push_str(
        "Do not use the same item twice in one outfit when another item of that category \
         is available.",
    );
    prompt
}

fn vocabulary_rules() -> String {
    fn join<T: Copy>(values: &[T], name: fn(&T) -> &'static str) -> String {
        values.iter().map(name).collect::<Vec<_>>().join(", ")
    }

    format!(
        "Allowed category values: {}.\n\
         Allowed formality values: {}.\n\
         Allowed seasonality values: {} (list at least one).",
        join(&ClothingCategory::ALL, ClothingCategory::as_str),
        join(&Formality::ALL, Formality::as_str),
        join(&Season::ALL, Season::as_str),
    )
}

/// Serialize closet items as compact, ASCII-only JSON
pub fn closet_items_json(items: &[ClosetItem]) -> String {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    // Infallible: Vec<u8> writes and plain-data Serialize impls cannot fail.
    items
        .serialize(&mut serializer)
        .expect("closet items serialize into an in-memory buffer");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Compact formatter that escapes every non-ASCII character as `\uXXXX`
struct AsciiFormatter;

impl serde_json::ser::Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
