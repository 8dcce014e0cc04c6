//! Preset management
//!
//! A preset is a named snapshot of the tags used for a filter plus the
//! contacts picked from its results. Presets are kept in a single JSON
//! file that is read when the store opens and rewritten on every change.
//!
//! # Features
//!
//! - **Save presets**: store tags and selected contacts under a name
//! - **Manage presets**: list, show, rename, and delete presets
//! - **Export**: write a preset's contacts as CSV
//!
//! # Storage
//!
//! Presets are stored in JSON format at `~/.config/contact-filter/presets.json`
//! by default. The location can be changed in the configuration file.

pub mod error;
pub mod operations;
pub mod types;

pub use error::PresetError;
pub use operations::PresetStore;
pub use types::{Preset, PresetEntry, PresetStorage, validate_preset_name};

use std::path::PathBuf;

/// Get the default preset storage path
///
/// Returns `~/.config/contact-filter/presets.json` (platform-specific)
///
/// # Errors
///
/// Returns `PresetError` if the config directory cannot be determined
pub fn default_preset_path() -> Result<PathBuf, PresetError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        PresetError::Config(config::ConfigError::Message(
            "Could not determine config directory".to_string(),
        ))
    })?;

    Ok(config_dir.join("contact-filter").join("presets.json"))
}
