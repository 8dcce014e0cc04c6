//! Preset data structures
//!
//! - `PresetEntry`: the tags used and the contacts checked off
//! - `Preset`: an entry under its name
//! - `PresetStorage`: every preset, in insertion order
//!
//! On disk the storage is one JSON object keyed by preset name:
//!
//! ```json
//! {
//!   "team1": {
//!     "tags": ["+mini"],
//!     "contacts": [{ "display_name": "alice+mini", "country": "US" }]
//!   }
//! }
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::contacts::{Contact, ContactCollection};

/// Snapshot of a tag selection and the contacts chosen from its results
///
/// Both fields are required and no others are accepted, so a hand-edited
/// entry with misspelled keys fails to parse instead of loading empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct PresetEntry {
    /// Tags in the order they were selected
    pub tags: Vec<String>,

    /// Selected contacts
    pub contacts: Vec<Contact>,
}

impl PresetEntry {
    #[must_use]
    pub fn new(tags: Vec<String>, contacts: Vec<Contact>) -> Self {
        Self { tags, contacts }
    }

    /// Contacts as a collection, ready for export or re-filtering
    #[must_use]
    pub fn contact_collection(&self) -> ContactCollection {
        self.contacts.iter().cloned().collect()
    }
}

/// A named preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub entry: PresetEntry,
}

/// Storage container for all presets
///
/// Keeps insertion order. Serialized as a JSON object, not an array, so the
/// name doubles as the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetStorage {
    presets: Vec<Preset>,
}

impl PresetStorage {
    /// Create a new empty storage
    #[must_use]
    pub const fn new() -> Self {
        Self {
            presets: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PresetEntry> {
        self.presets.iter().find(|p| p.name == name).map(|p| &p.entry)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p.name == name)
    }

    /// Insert or replace
    ///
    /// A replaced preset keeps its position; a new one is appended. Returns
    /// the previous entry, if any.
    pub fn insert(&mut self, name: String, entry: PresetEntry) -> Option<PresetEntry> {
        if let Some(existing) = self.presets.iter_mut().find(|p| p.name == name) {
            Some(std::mem::replace(&mut existing.entry, entry))
        } else {
            self.presets.push(Preset { name, entry });
            None
        }
    }

    /// Remove a preset by name
    pub fn remove(&mut self, name: &str) -> Option<PresetEntry> {
        let pos = self.presets.iter().position(|p| p.name == name)?;
        Some(self.presets.remove(pos).entry)
    }

    /// List all preset names in insertion order
    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Serialize for PresetStorage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.presets.len()))?;
        for preset in &self.presets {
            map.serialize_entry(&preset.name, &preset.entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PresetStorage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StorageVisitor;

        impl<'de> Visitor<'de> for StorageVisitor {
            type Value = PresetStorage;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of preset names to presets")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut storage = PresetStorage::new();
                while let Some((name, entry)) = access.next_entry::<String, PresetEntry>()? {
                    // a repeated key keeps its first position and its last value
                    storage.insert(name, entry);
                }
                Ok(storage)
            }
        }

        deserializer.deserialize_map(StorageVisitor)
    }
}

/// Validate a preset name
///
/// Names are free text but must contain something other than whitespace.
///
/// # Errors
///
/// Returns an error message if the name is empty or blank.
pub fn validate_preset_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Preset name cannot be empty".to_string());
    }
    Ok(())
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Preset: {}", self.name)?;
        writeln!(f)?;
        if self.entry.tags.is_empty() {
            writeln!(f, "Tags: (none)")?;
        } else {
            writeln!(f, "Tags: {}", self.entry.tags.join(", "))?;
        }
        writeln!(f, "Contacts: {}", self.entry.contacts.len())?;
        for contact in &self.entry.contacts {
            writeln!(f, "  {contact}")?;
        }
        Ok(())
    }
}
