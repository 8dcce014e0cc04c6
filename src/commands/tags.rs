//! Tags command implementation

use crate::config::AppConfig;
use crate::output;

/// Print the configured tag vocabulary, one tag per line
pub fn execute(config: &AppConfig, quiet: bool) {
    if !quiet {
        println!("Available tags:");
    }

    for tag in config.vocabulary().tags() {
        println!("{}", output::tag_entry(tag, quiet));
    }
}
