//! Prompt command implementation.

use crate::cli::{PromptArgs, PromptTarget};
use crate::commands::outfits::build_request;
use crate::error::Result;
use wardrobe_stylist::prompt::{build_analysis_prompt, build_outfit_prompt};

/// Execute the prompt command.
pub fn execute_prompt(args: PromptArgs) -> Result<()> {
    println!("{}", render_prompt(args.target)?);
    Ok(())
}

/// Render the exact prompt text a model call would carry.
pub fn render_prompt(target: PromptTarget) -> Result<String> {
    match target {
        PromptTarget::Analyze { text } => Ok(build_analysis_prompt(text.as_deref())),
        PromptTarget::Outfits(args) => Ok(build_outfit_prompt(&build_request(args)?)),
    }
}
