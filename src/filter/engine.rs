//! Tag filter engine
//!
//! Tags are matched as literal substrings of the lowercase display name.
//! Every tag goes through `regex::escape` before compilation, so characters
//! such as `.` or `+` only ever match themselves.
//!
//! # Iterator Adapter
//!
//! [`ContactFilterExt`] adds `filter_tags` to [`ContactCollection`]:
//!
//! ```
//! use contact_filter::contacts::{Contact, ContactCollection};
//! use contact_filter::filter::{ContactFilterExt, FilterSelection, TagMode};
//!
//! let contacts: ContactCollection = vec![
//!     Contact::new("alice+mini", "US"),
//!     Contact::new("bob+hdy", "UK"),
//! ]
//! .into();
//!
//! let selection = FilterSelection::new(["+mini"], TagMode::All).unwrap();
//! let matched = contacts.filter_tags(&selection).unwrap();
//! assert_eq!(matched.names(), vec!["alice+mini"]);
//! ```

use log::debug;
use regex::Regex;

use super::error::FilterError;
use super::types::{FilterSelection, TagMode};
use crate::contacts::{Contact, ContactCollection};

/// Compile a matcher for one tag, treating the tag text literally
fn literal_matcher(tag: &str) -> Result<Regex, FilterError> {
    Regex::new(&regex::escape(tag)).map_err(|e| FilterError::pattern(tag, &e))
}

/// Compile a single alternation matching any of the tags literally
fn alternation_matcher(tags: &[String]) -> Result<Regex, FilterError> {
    let pattern = tags
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).map_err(|e| FilterError::pattern(&pattern, &e))
}

/// Filter contacts by tag selection
///
/// - `All`: successive narrowing, one tag at a time
/// - `Any`: one alternation over every selected tag
///
/// An empty selection matches nothing. Result order is input order
/// restricted to matches; the input is left untouched.
///
/// # Errors
///
/// Returns `FilterError::Pattern` if a matcher cannot be compiled.
pub fn filter(
    contacts: &ContactCollection,
    selection: &FilterSelection,
) -> Result<ContactCollection, FilterError> {
    if selection.is_empty() {
        return Ok(ContactCollection::new());
    }

    let matched: Vec<&Contact> = match selection.mode() {
        TagMode::All => {
            let mut remaining: Vec<&Contact> = contacts.iter().collect();
            for tag in selection.tags() {
                let matcher = literal_matcher(tag)?;
                remaining.retain(|c| matcher.is_match(&c.display_name));
            }
            remaining
        }
        TagMode::Any => {
            let matcher = alternation_matcher(selection.tags())?;
            contacts
                .iter()
                .filter(|c| matcher.is_match(&c.display_name))
                .collect()
        }
    };

    debug!(
        "Tag filter {} [{}]: {} of {} contacts matched",
        selection.mode(),
        selection.tags().join(", "),
        matched.len(),
        contacts.len()
    );

    Ok(matched.into_iter().cloned().collect())
}

/// Extension trait adding tag filtering to contact collections
pub trait ContactFilterExt {
    /// Filter by tag selection; see [`filter`]
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Pattern` if a matcher cannot be compiled.
    fn filter_tags(&self, selection: &FilterSelection) -> Result<ContactCollection, FilterError>;
}

impl ContactFilterExt for ContactCollection {
    fn filter_tags(&self, selection: &FilterSelection) -> Result<ContactCollection, FilterError> {
        filter(self, selection)
    }
}
