//! contact-filter - Filter contact lists by tag markers
//!
//! This library narrows a contact list by `+tag` markers embedded in
//! display names and keeps named presets of the contacts picked from the
//! results in a durable JSON file.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod contacts;
pub mod filter;
pub mod output;
pub mod presets;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum AppError {
    /// Contact ingestion or export error
    #[error("Contact error: {0}")]
    ContactError(#[from] contacts::ContactError),
    /// Tag filter error
    #[error("Filter error: {0}")]
    FilterError(#[from] filter::FilterError),
    /// Preset store error
    #[error("Preset error: {0}")]
    PresetError(#[from] presets::PresetError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
