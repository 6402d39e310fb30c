//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Wardrobe CLI - Catalog a closet and plan outfits.
#[derive(Debug, Parser)]
#[command(name = "wardrobe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "WARDROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use the deterministic generator regardless of configuration
    #[arg(long, global = true)]
    pub mock: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Turn manual text and photos into closet items
    Analyze(AnalyzeArgs),

    /// Suggest outfits from a closet file
    Outfits(OutfitArgs),

    /// Print the prompt that would be sent, without calling the model
    Prompt(PromptArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Free-text list of clothes (comma, semicolon or newline separated)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Closet photo (jpg, png or webp); repeatable
    #[arg(short, long = "image")]
    pub images: Vec<PathBuf>,
}

/// Arguments for the outfits command.
#[derive(Debug, Clone, Args)]
pub struct OutfitArgs {
    /// JSON file with an array of closet items or stored item records
    #[arg(long)]
    pub closet: PathBuf,

    /// Occasion, e.g. "wedding guest"
    #[arg(short, long)]
    pub occasion: String,

    /// Plan for the day
    #[arg(short, long)]
    pub itinerary: String,

    /// Style preferences
    #[arg(short, long)]
    pub preferences: Option<String>,
}

/// Arguments for the prompt command.
#[derive(Debug, Args)]
pub struct PromptArgs {
    #[command(subcommand)]
    pub target: PromptTarget,
}

/// Which prompt to print.
#[derive(Debug, Subcommand)]
pub enum PromptTarget {
    /// Closet analysis prompt
    Analyze {
        /// Free-text list of clothes
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Outfit generation prompt
    Outfits(OutfitArgs),
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
