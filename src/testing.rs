//! Testing utilities for contact-filter
//!
//! This module provides fixture contacts and a `TestStore` wrapper for
//! preset stores living in a temporary directory.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::contacts::{Contact, ContactCollection};
use crate::presets::PresetStore;

/// CSV matching [`sample_contacts`], with an extra column the ingester ignores
pub const SAMPLE_CSV: &str = "\
display_name,skype_id,country
Alice+MINI,live:alice,US
bob+hdy,live:bob,UK
Carol+mini+HDY,live:carol,CA
";

/// alice (+mini), bob (+hdy) and carol (+mini +hdy)
#[must_use]
pub fn sample_contacts() -> ContactCollection {
    vec![
        Contact::new("alice+mini", "US"),
        Contact::new("bob+hdy", "UK"),
        Contact::new("carol+mini+hdy", "CA"),
    ]
    .into()
}

/// Write [`SAMPLE_CSV`] into `dir` and return its path
///
/// # Panics
/// Panics if the file cannot be written.
#[must_use]
pub fn write_sample_csv(dir: &Path) -> PathBuf {
    let path = dir.join("contacts.csv");
    fs::write(&path, SAMPLE_CSV).expect("Failed to write sample CSV");
    path
}

/// Preset store path inside a temporary directory that is removed on drop
pub struct TestStore {
    _dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    /// Create a fresh temporary directory; the store file does not exist yet
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("presets.json");
        Self { _dir: dir, path }
    }

    /// Open a store on the path with backups disabled
    ///
    /// # Panics
    /// Panics if the store cannot be opened.
    #[must_use]
    pub fn open(&self) -> PresetStore {
        PresetStore::without_backup(self.path.clone()).expect("Failed to open preset store")
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::ingest;

    #[test]
    fn test_sample_csv_matches_sample_contacts() {
        let parsed = ingest::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(parsed, sample_contacts());
    }

    #[test]
    fn test_store_cleanup_on_drop() {
        let dir_path;
        {
            let test = TestStore::new();
            dir_path = test.path().parent().unwrap().to_path_buf();
            assert!(dir_path.exists());
        }
        assert!(!dir_path.exists());
    }
}
