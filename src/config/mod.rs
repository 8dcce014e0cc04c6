//! Configuration module for contact-filter
//!
//! Manages the tag vocabulary, the preset store location and output
//! defaults. Configuration is stored in the user's config directory.

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::filter::{DEFAULT_TAGS, TagMode, TagVocabulary};

fn default_tags() -> Vec<String> {
    DEFAULT_TAGS.iter().map(|t| (*t).to_string()).collect()
}

const fn default_backup() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Tags offered for filtering, in display order
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,

    /// Preset store location (defaults next to the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets_path: Option<PathBuf>,

    /// Mode used when neither `--any` nor `--all` is given
    #[serde(default)]
    pub default_mode: TagMode,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Keep a `.backup` copy of the preset store before each write
    #[serde(default = "default_backup")]
    pub backup: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            presets_path: None,
            default_mode: TagMode::All,
            quiet: false,
            backup: default_backup(),
        }
    }
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("contact-filter").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file does not exist, cannot be parsed,
    /// or holds an invalid tag vocabulary.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Message(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        let mut config: Self = settings.try_deserialize()?;
        config.normalize_tags()?;
        Ok(config)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Lowercase tags and check each is a non-empty `+` marker
    fn normalize_tags(&mut self) -> Result<(), ConfigError> {
        if self.tags.is_empty() {
            return Err(ConfigError::Message("Tag list cannot be empty".to_string()));
        }

        for tag in &mut self.tags {
            *tag = tag.trim().to_lowercase();
            if tag.len() < 2 || !tag.starts_with('+') {
                return Err(ConfigError::Message(format!(
                    "Invalid tag '{tag}': tags must start with '+' followed by a name"
                )));
            }
        }

        Ok(())
    }

    /// The configured tag vocabulary
    #[must_use]
    pub fn vocabulary(&self) -> TagVocabulary {
        TagVocabulary::new(self.tags.clone())
    }

    /// Resolve the preset store path, falling back to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the config
    /// directory cannot be determined.
    pub fn presets_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.presets_path {
            Some(path) => Ok(path.clone()),
            None => crate::presets::default_preset_path().map_err(|e| ConfigError::Message(e.to_string())),
        }
    }
}
