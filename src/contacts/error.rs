//! Error types for contact ingestion and export
//!
//! Ingestion is the boundary where loosely shaped CSV data becomes typed
//! [`Contact`](super::Contact) records, so column presence is checked here
//! and nowhere else.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing contact lists
#[derive(Debug, Error)]
pub enum ContactError {
    /// A required column is absent from the source data
    #[error("Configuration error: CSV must contain a '{0}' column")]
    MissingColumn(String),

    /// The source file could not be opened
    #[error("Failed to open contacts file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV input
    #[error("Invalid CSV at record {record}: {message}")]
    Parse { record: u64, message: String },

    /// Failure while writing exported rows
    #[error("Failed to write CSV: {0}")]
    Write(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<csv::Error> for ContactError {
    fn from(err: csv::Error) -> Self {
        let record = err.position().map_or(0, csv::Position::record);
        Self::Parse {
            record,
            message: err.to_string(),
        }
    }
}
