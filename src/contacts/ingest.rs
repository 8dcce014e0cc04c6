//! CSV ingestion
//!
//! Turns an exported contact list into a [`ContactCollection`]:
//! - the `display_name` column is required and lowercased
//! - the first column whose header contains "country" (any case) supplies
//!   the country; without one every contact gets [`UNKNOWN_COUNTRY`]
//!
//! Ragged rows are accepted; a missing cell reads as blank.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::error::ContactError;
use super::types::{Contact, ContactCollection, UNKNOWN_COUNTRY};

/// Header of the required name column
pub const DISPLAY_NAME_COLUMN: &str = "display_name";

/// Column positions resolved from a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub display_name: usize,
    pub country: Option<usize>,
}

impl ColumnLayout {
    /// Resolve column positions from header names
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingColumn` if there is no `display_name` header.
    pub fn from_headers<'a>(
        headers: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ContactError> {
        let headers: Vec<&str> = headers.into_iter().collect();

        let display_name = headers
            .iter()
            .position(|h| h.trim() == DISPLAY_NAME_COLUMN)
            .ok_or_else(|| ContactError::MissingColumn(DISPLAY_NAME_COLUMN.to_string()))?;

        let country = headers
            .iter()
            .position(|h| h.to_lowercase().contains("country"));

        Ok(Self {
            display_name,
            country,
        })
    }
}

/// Read contacts from a CSV file
///
/// # Errors
///
/// Returns `ContactError` if the file cannot be opened, is not valid CSV,
/// or lacks a `display_name` column.
pub fn read_csv(path: &Path) -> Result<ContactCollection, ContactError> {
    let file = File::open(path).map_err(|source| ContactError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let contacts = from_reader(file)?;
    debug!("Loaded {} contacts from {}", contacts.len(), path.display());
    Ok(contacts)
}

/// Read contacts from any CSV source with a header row
///
/// # Errors
///
/// Returns `ContactError` if the input is not valid CSV or lacks a
/// `display_name` column.
pub fn from_reader<R: Read>(reader: R) -> Result<ContactCollection, ContactError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let layout = ColumnLayout::from_headers(rdr.headers()?.iter())?;
    if layout.country.is_none() {
        debug!("No country column found, defaulting to '{UNKNOWN_COUNTRY}'");
    }

    let mut contacts = ContactCollection::new();
    for record in rdr.records() {
        let record = record?;
        let name = record.get(layout.display_name).unwrap_or_default();
        let country = layout
            .country
            .and_then(|idx| record.get(idx))
            .unwrap_or_default();
        contacts.push(Contact::new(name, country));
    }

    Ok(contacts)
}
