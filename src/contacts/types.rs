//! Contact record types
//!
//! - `Contact`: one row of a contact list (display name plus country)
//! - `ContactCollection`: ordered contacts in source file order

use serde::{Deserialize, Serialize};

/// Country value used when the source data carries no country information
pub const UNKNOWN_COUNTRY: &str = "N/A";

/// A single contact
///
/// `display_name` is the matching key for tag filters and is expected to be
/// lowercase; [`Contact::new`] normalizes it, deserialization does not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Lowercase display name, including any `+tag` markers
    pub display_name: String,

    /// Country, or [`UNKNOWN_COUNTRY`]
    pub country: String,
}

impl Contact {
    /// Create a contact, lowercasing the display name and defaulting a blank country
    ///
    /// A non-blank country is stored exactly as given.
    #[must_use]
    pub fn new(display_name: &str, country: &str) -> Self {
        Self {
            display_name: display_name.to_lowercase(),
            country: if country.trim().is_empty() {
                UNKNOWN_COUNTRY.to_string()
            } else {
                country.to_string()
            },
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.country)
    }
}

/// Ordered collection of contacts
///
/// Order is the order of the source file. Filtering produces a new
/// collection and never reorders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ContactCollection {
    contacts: Vec<Contact>,
}

impl ContactCollection {
    /// Create an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Display names in collection order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.contacts
            .iter()
            .map(|c| c.display_name.as_str())
            .collect()
    }

    /// Keep only contacts whose display name is in `names`
    ///
    /// Names are compared case-insensitively. Collection order is kept, not
    /// the order of `names`.
    #[must_use]
    pub fn select_by_name(&self, names: &[String]) -> Self {
        let wanted: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        self.contacts
            .iter()
            .filter(|c| wanted.contains(&c.display_name))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Contact> {
        self.contacts
    }
}

impl From<Vec<Contact>> for ContactCollection {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl FromIterator<Contact> for ContactCollection {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ContactCollection {
    type Item = Contact;
    type IntoIter = std::vec::IntoIter<Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContactCollection {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
