//! Preset store
//!
//! [`PresetStore`] owns the backing file for the lifetime of the process.
//! It reads the file once when opened and writes the whole mapping back
//! after every mutation, so nothing survives only in memory.
//!
//! There is no locking. Two processes writing the same file will lose
//! updates; the last full write wins.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::error::PresetError;
use super::types::{PresetEntry, PresetStorage, validate_preset_name};

/// Durable mapping from preset name to [`PresetEntry`]
///
/// # Examples
///
/// ```no_run
/// use contact_filter::contacts::Contact;
/// use contact_filter::presets::{PresetEntry, PresetStore};
/// use std::path::PathBuf;
///
/// let mut store = PresetStore::open(PathBuf::from("presets.json")).unwrap();
/// let entry = PresetEntry::new(
///     vec!["+mini".to_string()],
///     vec![Contact::new("alice+mini", "US")],
/// );
/// store.save("team1", entry).unwrap();
/// assert!(store.list().contains(&"team1"));
/// ```
#[derive(Debug)]
pub struct PresetStore {
    path: PathBuf,
    storage: PresetStorage,
    auto_backup: bool,
}

impl PresetStore {
    /// Open the store at `path`, reading it if it exists
    ///
    /// # Errors
    ///
    /// Returns `PresetError::Corrupt` if the file exists but cannot be
    /// parsed, or `PresetError::Io` if it cannot be read.
    pub fn open(path: PathBuf) -> Result<Self, PresetError> {
        let storage = read_storage(&path)?;
        Ok(Self {
            path,
            storage,
            auto_backup: true,
        })
    }

    /// Open the store with auto-backup disabled
    ///
    /// # Errors
    ///
    /// See [`PresetStore::open`].
    pub fn without_backup(path: PathBuf) -> Result<Self, PresetError> {
        let mut store = Self::open(path)?;
        store.auto_backup = false;
        Ok(store)
    }

    /// Enable or disable auto-backup
    pub const fn set_auto_backup(&mut self, enabled: bool) {
        self.auto_backup = enabled;
    }

    /// Re-read the backing file, replacing the in-memory mapping
    ///
    /// An absent file yields an empty mapping. On error the in-memory
    /// mapping is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `PresetError::Corrupt` if the file cannot be parsed.
    pub fn load(&mut self) -> Result<&PresetStorage, PresetError> {
        self.storage = read_storage(&self.path)?;
        Ok(&self.storage)
    }

    /// Save a preset, overwriting any preset with the same name
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if:
    /// - The name is empty
    /// - The backing file cannot be written
    pub fn save(&mut self, name: &str, entry: PresetEntry) -> Result<(), PresetError> {
        validate_preset_name(name).map_err(|e| PresetError::InvalidName(name.to_string(), e))?;

        let mut updated = self.storage.clone();
        let replaced = updated.insert(name.to_string(), entry).is_some();
        self.commit(updated)?;

        if replaced {
            info!("Overwrote preset '{name}'");
        } else {
            info!("Saved preset '{name}'");
        }
        Ok(())
    }

    /// Rename a preset
    ///
    /// The renamed preset moves to the end of the listing order.
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if:
    /// - The new name is empty or equal to the old name
    /// - The old preset is not found
    /// - A preset with the new name already exists
    /// - The backing file cannot be written
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), PresetError> {
        self.rename_inner(old_name, new_name, false)
    }

    /// Rename a preset, replacing any preset already using the new name
    ///
    /// # Errors
    ///
    /// Same as [`PresetStore::rename`], minus the collision check.
    pub fn rename_overwrite(&mut self, old_name: &str, new_name: &str) -> Result<(), PresetError> {
        self.rename_inner(old_name, new_name, true)
    }

    fn rename_inner(
        &mut self,
        old_name: &str,
        new_name: &str,
        overwrite: bool,
    ) -> Result<(), PresetError> {
        validate_preset_name(new_name)
            .map_err(|e| PresetError::InvalidName(new_name.to_string(), e))?;

        if old_name == new_name {
            return Err(PresetError::InvalidName(
                new_name.to_string(),
                "New name must differ from the current name".to_string(),
            ));
        }

        if !self.storage.contains(old_name) {
            return Err(PresetError::NotFound(old_name.to_string()));
        }

        if !overwrite && self.storage.contains(new_name) {
            return Err(PresetError::AlreadyExists(new_name.to_string()));
        }

        let mut updated = self.storage.clone();
        let entry = updated
            .remove(old_name)
            .ok_or_else(|| PresetError::NotFound(old_name.to_string()))?;
        updated.remove(new_name);
        updated.insert(new_name.to_string(), entry);
        self.commit(updated)?;

        info!("Renamed preset '{old_name}' to '{new_name}'");
        Ok(())
    }

    /// Delete a preset, returning its entry
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if:
    /// - The preset is not found
    /// - The backing file cannot be written
    pub fn delete(&mut self, name: &str) -> Result<PresetEntry, PresetError> {
        let mut updated = self.storage.clone();
        let entry = updated
            .remove(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))?;
        self.commit(updated)?;

        info!("Deleted preset '{name}'");
        Ok(entry)
    }

    /// Get a preset by name
    ///
    /// # Errors
    ///
    /// Returns `PresetError::NotFound` if no preset has this name.
    pub fn get(&self, name: &str) -> Result<&PresetEntry, PresetError> {
        self.storage
            .get(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    /// Preset names in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        self.storage.list_names()
    }

    /// The in-memory mapping
    #[must_use]
    pub const fn entries(&self) -> &PresetStorage {
        &self.storage
    }

    /// Get the storage path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `updated`, then adopt it as the in-memory mapping
    fn commit(&mut self, updated: PresetStorage) -> Result<(), PresetError> {
        self.write(&updated)?;
        self.storage = updated;
        Ok(())
    }

    /// Replace the backing file in one step
    ///
    /// The JSON is written to a sibling temp file which is then renamed over
    /// the target, so readers never see a half-written file.
    fn write(&self, storage: &PresetStorage) -> Result<(), PresetError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if self.auto_backup && self.path.exists() {
            let backup_path = self.path.with_extension("json.backup");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Could not back up {} to {}: {e}", self.path.display(), backup_path.display());
            }
        }

        let json = serde_json::to_string_pretty(storage)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!("Wrote {} presets to {}", storage.len(), self.path.display());
        Ok(())
    }
}

/// Read the mapping from `path`; an absent file is an empty mapping
fn read_storage(path: &Path) -> Result<PresetStorage, PresetError> {
    if !path.exists() {
        debug!("No preset store at {}, starting empty", path.display());
        return Ok(PresetStorage::new());
    }

    let bytes = fs::read(path)?;
    let storage: PresetStorage =
        serde_json::from_slice(&bytes).map_err(|e| PresetError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!("Loaded {} presets from {}", storage.len(), path.display());
    Ok(storage)
}
