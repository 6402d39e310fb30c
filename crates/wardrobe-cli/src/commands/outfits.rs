//! Outfits command implementation.

use crate::cli::OutfitArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use wardrobe_domain::{
    to_generation_items, ClosetItem, ClosetItemRecord, GenerateOutfitsRequest, Validate,
};
use wardrobe_stylist::Stylist;

/// Accepted closet file layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClosetFile {
    /// Rows exported from the data store
    Records(Vec<ClosetItemRecord>),
    /// Plain items, e.g. the `items` of an analysis
    Items(Vec<ClosetItem>),
}

/// Execute the outfits command.
pub async fn execute_outfits(
    args: OutfitArgs,
    stylist: &Stylist,
    formatter: &Formatter,
) -> Result<()> {
    let request = build_request(args)?;
    let result = stylist.generate_outfits(&request).await?;

    println!("{}", formatter.format_outfits(&result)?);
    Ok(())
}

/// Build and check a generation request from command arguments.
pub fn build_request(args: OutfitArgs) -> Result<GenerateOutfitsRequest> {
    let request = GenerateOutfitsRequest {
        closet_items: load_closet(&args.closet)?,
        occasion: args.occasion.trim().to_string(),
        itinerary: args.itinerary.trim().to_string(),
        preferences: args
            .preferences
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty()),
    };

    request
        .validate()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    Ok(request)
}

/// Read closet items from a JSON file of items or stored records.
pub fn load_closet(path: &Path) -> Result<Vec<ClosetItem>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
    })?;

    match serde_json::from_str(&contents)? {
        ClosetFile::Records(records) => Ok(to_generation_items(&records)),
        ClosetFile::Items(items) => Ok(items),
    }
}
