//! Wardrobe CLI - Command-line interface for closet analysis and outfit planning.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wardrobe_cli::commands;
use wardrobe_cli::{Cli, Command, Config, Formatter};
use wardrobe_stylist::{Stylist, UploadLimits};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> wardrobe_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config file, then environment overrides
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.mock {
        config.stylist.mock_mode = true;
    }
    debug!("Loaded configuration: {:?}", config);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Prompt(args) => commands::execute_prompt(args)?,
        Command::Analyze(args) => {
            let stylist = Stylist::from_config(&config.stylist)?;
            let limits = UploadLimits::from_config(&config.stylist);
            commands::execute_analyze(args, &stylist, &limits, &formatter).await?;
        }
        Command::Outfits(args) => {
            let stylist = Stylist::from_config(&config.stylist)?;
            commands::execute_outfits(args, &stylist, &formatter).await?;
        }
    }

    Ok(())
}

/// Log to stderr. `--verbose` forces debug; otherwise `RUST_LOG` or info.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
