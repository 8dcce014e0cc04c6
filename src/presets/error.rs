//! Error types for preset operations
//!
//! Covers name validation, lookups of missing presets, rename collisions,
//! and backing files that exist but cannot be parsed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during preset operations
#[derive(Debug, Error)]
pub enum PresetError {
    /// Preset not found
    #[error("Preset '{0}' not found")]
    NotFound(String),

    /// Preset already exists
    #[error("Preset '{0}' already exists")]
    AlreadyExists(String),

    /// Invalid preset name
    #[error("Invalid preset name '{0}': {1}")]
    InvalidName(String, String),

    /// Backing file exists but is not a valid preset mapping
    #[error("Preset store {} is corrupt: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<serde_json::Error> for PresetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
