//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use wardrobe_domain::{category_counts, ClosetAnalysisResult, InputSource, OutfitGenerationResult};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a closet analysis.
    pub fn format_analysis(
        &self,
        analysis: &ClosetAnalysisResult,
        source: InputSource,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_analysis_json(analysis, source),
            OutputFormat::Table => Ok(self.format_analysis_table(analysis, source)),
        }
    }

    /// Format generated outfits.
    pub fn format_outfits(&self, result: &OutfitGenerationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_outfits_table(result)),
        }
    }

    fn format_analysis_json(
        &self,
        analysis: &ClosetAnalysisResult,
        source: InputSource,
    ) -> Result<String> {
        let counts: serde_json::Map<String, serde_json::Value> = category_counts(&analysis.items)
            .into_iter()
            .map(|(category, count)| (category.as_str().to_string(), count.into()))
            .collect();

        let value = serde_json::json!({
            "source": source,
            "summary": analysis.summary,
            "category_counts": counts,
            "items": analysis.items,
            "warnings": analysis.warnings,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_analysis_table(
        &self,
        analysis: &ClosetAnalysisResult,
        source: InputSource,
    ) -> String {
        let mut out = Vec::new();
        out.push(self.colorize(&analysis.summary, "cyan"));
        out.push(format!("Source: {}", source));

        let counts = category_counts(&analysis.items)
            .into_iter()
            .map(|(category, count)| format!("{} {}", category, count))
            .collect::<Vec<_>>()
            .join(", ");
        out.push(format!("Categories: {}", counts));

        if analysis.items.is_empty() {
            out.push(self.colorize("No items found.", "yellow"));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["ID", "Name", "Category", "Color", "Formality", "Seasons"]);
            for item in &analysis.items {
                let seasons = item
                    .seasonality
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                builder.push_record([
                    item.id.as_str(),
                    item.name.as_str(),
                    item.category.as_str(),
                    item.color.as_str(),
                    item.formality.as_str(),
                    seasons.as_str(),
                ]);
            }
            out.push(self.table(builder));
        }

        for warning in &analysis.warnings {
            out.push(self.warning(warning));
        }

        out.join("\n")
    }

    fn format_outfits_table(&self, result: &OutfitGenerationResult) -> String {
        let mut out = Vec::new();

        for outfit in &result.outfits {
            out.push(self.colorize(
                &format!(
                    "{} ({}) confidence {:.2}",
                    outfit.title, outfit.outfit_id, outfit.confidence
                ),
                "cyan",
            ));

            let mut builder = Builder::default();
            builder.push_record(["Item", "Name", "Category", "Styling note"]);
            for piece in &outfit.pieces {
                builder.push_record([
                    piece.item_id.as_str(),
                    piece.item_name.as_str(),
                    piece.category.as_str(),
                    piece.styling_note.as_str(),
                ]);
            }
            out.push(self.table(builder));
            out.push(outfit.reasoning.clone());

            for alternative in &outfit.alternatives {
                out.push(format!("  - {}", alternative));
            }
            out.push(String::new());
        }

        for tip in &result.global_tips {
            out.push(self.info(tip));
        }

        out.join("\n")
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
