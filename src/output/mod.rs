//! Output formatting for CLI display
//!
//! Plain-text rendering of contacts, tags and presets. In quiet mode only
//! the bare values are printed so output can be piped.

use colored::Colorize;

use crate::contacts::Contact;
use crate::presets::Preset;

/// Format contacts as an aligned two-column table
#[must_use]
pub fn contact_table(contacts: &[Contact], quiet: bool) -> Vec<String> {
    if quiet {
        return contacts.iter().map(|c| c.display_name.clone()).collect();
    }

    let width = contacts
        .iter()
        .map(|c| c.display_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("display_name".len());

    let mut lines = Vec::with_capacity(contacts.len() + 1);
    lines.push(
        format!("  {:<width$}  {}", "display_name", "country")
            .bold()
            .to_string(),
    );
    for contact in contacts {
        lines.push(format!("  {:<width$}  {}", contact.display_name, contact.country));
    }
    lines
}

/// Summary line for a filter run
#[must_use]
pub fn match_summary(matched: usize, total: usize) -> String {
    format!("Found {matched} matching contacts (of {total}).")
        .green()
        .to_string()
}

/// Format a tag for the vocabulary listing
#[must_use]
pub fn tag_entry(tag: &str, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {}", tag.cyan())
    }
}

/// Format a preset as a single listing line
#[must_use]
pub fn preset_line(preset: &Preset, width: usize, quiet: bool) -> String {
    if quiet {
        return preset.name.clone();
    }

    let count = preset.entry.contacts.len();
    let tags = if preset.entry.tags.is_empty() {
        String::from("(no tags)")
    } else {
        preset.entry.tags.join(" ")
    };

    format!(
        "  {:<width$}  {} contact{}  {}",
        preset.name,
        count,
        if count == 1 { "" } else { "s" },
        tags.dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::PresetEntry;

    #[test]
    fn test_contact_table_quiet() {
        let contacts = [Contact::new("alice+mini", "US"), Contact::new("bob+hdy", "UK")];
        assert_eq!(contact_table(&contacts, true), vec!["alice+mini", "bob+hdy"]);
    }

    #[test]
    fn test_contact_table_has_header_row() {
        colored::control::set_override(false);
        let contacts = [Contact::new("alice+mini", "US")];
        let lines = contact_table(&contacts, false);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("display_name"));
        assert!(lines[1].contains("alice+mini"));
        assert!(lines[1].ends_with("US"));
    }

    #[test]
    fn test_preset_line() {
        colored::control::set_override(false);
        let preset = Preset {
            name: "team1".to_string(),
            entry: PresetEntry::new(
                vec!["+mini".to_string()],
                vec![Contact::new("alice+mini", "US")],
            ),
        };

        assert_eq!(preset_line(&preset, 5, true), "team1");
        assert_eq!(preset_line(&preset, 5, false), "  team1  1 contact  +mini");
    }
}
