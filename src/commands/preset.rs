//! Preset management command implementation
//!
//! This module provides commands for managing saved presets:
//! - List all presets
//! - Show the tags and contacts of a preset
//! - Save filtered contacts as a preset
//! - Rename presets
//! - Delete presets
//! - Export a preset's contacts as CSV

use std::io;
use std::path::Path;

use dialoguer::Confirm;

use super::filter as filter_cmd;
use crate::AppError;
use crate::cli::{PresetCommands, SelectionArgs};
use crate::config::AppConfig;
use crate::contacts::export;
use crate::output;
use crate::presets::{Preset, PresetEntry, PresetStore};

type Result<T> = std::result::Result<T, AppError>;

/// Execute a preset management command
///
/// Routes to the appropriate subcommand handler based on the command type.
///
/// # Errors
///
/// Returns `AppError` if:
/// - The preset store cannot be read or written
/// - A named preset does not exist
/// - Any preset operation fails validation
pub fn execute(command: &PresetCommands, config: &AppConfig, quiet: bool) -> Result<()> {
    let mut store = open_store(config)?;

    match command {
        PresetCommands::List => list_presets(&store, quiet),
        PresetCommands::Show { name } => show_preset(&store, name, quiet)?,
        PresetCommands::Save {
            name,
            input,
            selection,
            select,
        } => save_preset(&mut store, name, input, selection, select, config, quiet)?,
        PresetCommands::Rename {
            old_name,
            new_name,
            force,
        } => rename_preset(&mut store, old_name, new_name, *force, quiet)?,
        PresetCommands::Delete { name, yes } => delete_preset(&mut store, name, *yes, quiet)?,
        PresetCommands::Export { name, output } => {
            export_preset(&store, name, output.as_deref(), quiet)?;
        }
    }

    Ok(())
}

/// Open the preset store named by the configuration
///
/// # Errors
///
/// Returns `AppError` if the store path cannot be resolved or the store is corrupt.
pub fn open_store(config: &AppConfig) -> Result<PresetStore> {
    let mut store = PresetStore::open(config.presets_path()?)?;
    store.set_auto_backup(config.backup);
    Ok(store)
}

/// List all saved presets
fn list_presets(store: &PresetStore, quiet: bool) {
    let storage = store.entries();

    if storage.is_empty() {
        if !quiet {
            println!("No saved presets.");
            println!("Create one with: cfilter preset save <name> <csv> -t <tag>");
        }
        return;
    }

    if !quiet {
        println!("Saved Presets:");
        println!();
    }

    let width = storage
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    for preset in storage.iter() {
        println!("{}", output::preset_line(preset, width, quiet));
    }
}

/// Show detailed information about a specific preset
fn show_preset(store: &PresetStore, name: &str, quiet: bool) -> Result<()> {
    let entry = store.get(name)?;

    if quiet {
        for contact in &entry.contacts {
            println!("{}", contact.display_name);
        }
        return Ok(());
    }

    let preset = Preset {
        name: name.to_string(),
        entry: entry.clone(),
    };
    print!("{preset}");

    Ok(())
}

/// Filter a contact list and save the chosen matches under `name`
fn save_preset(
    store: &mut PresetStore,
    name: &str,
    input: &Path,
    selection: &SelectionArgs,
    select: &[String],
    config: &AppConfig,
    quiet: bool,
) -> Result<()> {
    let Some(result) = filter_cmd::run(input, selection, config, quiet)? else {
        return Ok(());
    };

    let chosen = if select.is_empty() {
        result.matched
    } else {
        let names = result.matched.names();
        let missing: Vec<&str> = select
            .iter()
            .map(String::as_str)
            .filter(|s| !names.contains(&s.to_lowercase().as_str()))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Not among the {} matches: {}",
                result.matched.len(),
                missing.join(", ")
            )));
        }
        result.matched.select_by_name(select)
    };

    let replaced = store.entries().contains(name);
    let count = chosen.len();
    store.save(
        name,
        PresetEntry::new(result.selection.tags().to_vec(), chosen.into_vec()),
    )?;

    if !quiet {
        let verb = if replaced { "updated" } else { "saved" };
        println!(
            "Preset '{name}' {verb} with {count} contact{}",
            if count == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// Rename a preset
fn rename_preset(
    store: &mut PresetStore,
    old_name: &str,
    new_name: &str,
    force: bool,
    quiet: bool,
) -> Result<()> {
    if force {
        store.rename_overwrite(old_name, new_name)?;
    } else {
        store.rename(old_name, new_name)?;
    }

    if !quiet {
        println!("Preset '{old_name}' renamed to '{new_name}'");
    }

    Ok(())
}

/// Delete a preset by name
fn delete_preset(store: &mut PresetStore, name: &str, yes: bool, quiet: bool) -> Result<()> {
    let _ = store.get(name)?;

    if !yes && !quiet {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete preset '{name}'?"))
            .default(false)
            .interact()
            .map_err(|e| AppError::InvalidInput(format!("Failed to get confirmation: {e}")))?;
        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    store.delete(name)?;

    if !quiet {
        println!("Preset '{name}' deleted");
    }

    Ok(())
}

/// Export a preset's contacts to a file or stdout
fn export_preset(store: &PresetStore, name: &str, output: Option<&Path>, quiet: bool) -> Result<()> {
    let entry = store.get(name)?;

    if let Some(path) = output {
        export::write_csv_file(path, &entry.contacts)?;
        if !quiet {
            let count = entry.contacts.len();
            println!(
                "Exported {count} contact{} to {}",
                if count == 1 { "" } else { "s" },
                path.display()
            );
        }
    } else {
        export::write_csv(io::stdout().lock(), &entry.contacts)?;
    }

    Ok(())
}
