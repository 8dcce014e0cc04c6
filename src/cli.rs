//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for `cfilter` using the `clap` crate.
//!
//! # Commands
//!
//! - **tags**: Show the configured tag vocabulary
//! - **filter**: Filter a contact CSV by tags and print or export the matches
//! - **preset**: Save, list, show, rename, delete, and export presets
//!
//! # Examples
//!
//! ```
//! use contact_filter::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["cfilter", "filter", "contacts.csv", "-t", "+mini", "--any"]);
//! assert!(matches!(cli.command, Commands::Filter { .. }));
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::TagMode;

/// Tag selection shared by `filter` and `preset save`
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Tags to filter by (can specify multiple: -t +mini -t +hdy)
    #[arg(short = 't', long = "tag", value_name = "TAG", num_args = 0..)]
    pub tags: Vec<String>,

    /// Match contacts with ANY of the tags (OR logic)
    #[arg(long = "any", conflicts_with = "all")]
    pub any: bool,

    /// Match contacts with ALL of the tags (AND logic)
    #[arg(long = "all", conflicts_with = "any")]
    pub all: bool,
}

impl SelectionArgs {
    /// Resolve the mode, falling back to `default` when no flag was given
    #[must_use]
    pub const fn mode(&self, default: TagMode) -> TagMode {
        if self.any {
            TagMode::Any
        } else if self.all {
            TagMode::All
        } else {
            default
        }
    }
}

/// Preset management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PresetCommands {
    /// List all saved presets
    #[command(visible_alias = "ls")]
    List,

    /// Show the tags and contacts of a preset
    Show {
        /// Name of the preset to show
        name: String,
    },

    /// Filter a contact list and save the matches as a preset
    Save {
        /// Name of the preset (overwrites an existing preset)
        name: String,

        /// Contact CSV with a `display_name` column
        #[arg(value_name = "CSV")]
        input: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Keep only these contacts from the matches (default: all matches)
        #[arg(short = 's', long = "select", value_name = "NAME", num_args = 0..)]
        select: Vec<String>,
    },

    /// Rename a preset
    #[command(visible_alias = "mv")]
    Rename {
        /// Current name of the preset
        old_name: String,

        /// New name for the preset
        new_name: String,

        /// Replace a preset that already uses the new name
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Delete a preset
    #[command(visible_alias = "rm")]
    Delete {
        /// Name of the preset to delete
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Export a preset's contacts as CSV
    Export {
        /// Name of the preset to export
        name: String,

        /// Output file (default: stdout)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cfilter")]
#[command(about = "Filter contact lists by tag and keep named presets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Configuration file to use instead of the default
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Preset store to use (overrides config)
    #[arg(long = "presets", value_name = "PATH", global = true)]
    pub presets: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the tags available for filtering
    Tags,

    /// Filter a contact CSV by tags
    #[command(visible_alias = "f")]
    Filter {
        /// Contact CSV with a `display_name` column
        #[arg(value_name = "CSV")]
        input: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Write matches to this CSV file instead of printing them
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Manage saved presets
    #[command(visible_alias = "p")]
    Preset {
        #[command(subcommand)]
        command: PresetCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
