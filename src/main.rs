//! cfilter CLI application entry point
//!
//! Filters exported contact lists by `+tag` markers in display names and
//! manages named presets of the matches.
//!
//! # Usage
//!
//! ```bash
//! # Show the tags available for filtering
//! cfilter tags
//!
//! # Contacts tagged both +mini and +hdy
//! cfilter filter contacts.csv -t +mini -t +hdy
//!
//! # Contacts tagged +mini or +hdy, written to a CSV file
//! cfilter filter contacts.csv -t +mini +hdy --any -o filtered.csv
//!
//! # Save matches as a preset, then manage it
//! cfilter preset save team1 contacts.csv -t +mini -s alice+mini
//! cfilter preset list
//! cfilter preset rename team1 med-brokers
//! cfilter preset export med-brokers -o med.csv
//! cfilter preset delete med-brokers --yes
//! ```
//!
//! # Configuration
//!
//! Settings live in `~/.config/contact-filter/config.toml` on Linux and are
//! created with defaults on first run. Set `RUST_LOG=debug` for diagnostics.

use std::process::ExitCode;

use colored::Colorize;
use log::debug;

use contact_filter::{
    AppError,
    cli::{Cli, Commands},
    commands,
    config::AppConfig,
};

type Result<T> = std::result::Result<T, AppError>;

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    if let Some(presets) = &cli.presets {
        config.presets_path = Some(presets.clone());
    }

    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let quiet = cli.quiet || config.quiet;
    if let Ok(path) = config.presets_path() {
        debug!("Using preset store {}", path.display());
    }

    match &cli.command {
        Commands::Tags => commands::tags(&config, quiet),
        Commands::Filter {
            input,
            selection,
            output,
        } => commands::filter(input, selection, output.as_deref(), &config, quiet)?,
        Commands::Preset { command } => commands::preset(command, &config, quiet)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
