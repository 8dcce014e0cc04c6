//! CSV export
//!
//! Writes contacts as `display_name,country` with a header row and no
//! index column.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::debug;

use super::error::ContactError;
use super::types::Contact;

/// Header row written by every export
pub const EXPORT_HEADER: [&str; 2] = ["display_name", "country"];

/// Write contacts as CSV to any writer
///
/// # Errors
///
/// Returns `ContactError::Write` if a row cannot be written or flushed.
pub fn write_csv<'a, W: Write>(
    writer: W,
    contacts: impl IntoIterator<Item = &'a Contact>,
) -> Result<(), ContactError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)
        .map_err(|e| ContactError::Write(e.to_string()))?;

    for contact in contacts {
        wtr.write_record([contact.display_name.as_str(), contact.country.as_str()])
            .map_err(|e| ContactError::Write(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render contacts as CSV text
///
/// # Errors
///
/// Returns `ContactError::Write` if serialization fails.
pub fn to_csv_string<'a>(
    contacts: impl IntoIterator<Item = &'a Contact>,
) -> Result<String, ContactError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, contacts)?;
    String::from_utf8(buf).map_err(|e| ContactError::Write(e.to_string()))
}

/// Write contacts to a CSV file, creating parent directories as needed
///
/// # Errors
///
/// Returns `ContactError` if the file cannot be created or written.
pub fn write_csv_file<'a>(
    path: &Path,
    contacts: impl IntoIterator<Item = &'a Contact>,
) -> Result<(), ContactError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    write_csv(file, contacts)?;
    debug!("Exported contacts to {}", path.display());
    Ok(())
}
