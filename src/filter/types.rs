//! Filter selection types
//!
//! - `TagMode`: how multiple tags combine (ALL = AND, ANY = OR)
//! - `FilterSelection`: the tags chosen by the caller plus a mode
//! - `TagVocabulary`: the closed, ordered set of tags a selection may use

use serde::{Deserialize, Serialize};

use super::error::FilterError;

/// Tags known out of the box
pub const DEFAULT_TAGS: [&str; 17] = [
    "+mini", "+hdy", "+smx", "+pmx", "+cape", "+med", "+atl", "+rsea", "+safr", "+pg", "+wci",
    "+eci", "+seas", "+feast", "+nopac", "+aus", "+aust",
];

/// Tag matching mode (ALL = AND, ANY = OR)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// Match ALL tags (AND logic)
    #[default]
    All,
    /// Match ANY tag (OR logic)
    Any,
}

impl std::fmt::Display for TagMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "AND"),
            Self::Any => write!(f, "OR"),
        }
    }
}

/// A set of tags plus the mode combining them
///
/// Duplicate tags collapse to their first occurrence so the saved order
/// stays the order the caller picked them in. Matching does not depend on
/// tag order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    tags: Vec<String>,
    mode: TagMode,
}

impl FilterSelection {
    /// Create a selection
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EmptyTag` if any tag is the empty string.
    pub fn new<I, S>(tags: I, mode: TagMode) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into();
            if tag.is_empty() {
                return Err(FilterError::EmptyTag);
            }
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        Ok(Self { tags: unique, mode })
    }

    /// Selection with no tags
    #[must_use]
    pub const fn empty(mode: TagMode) -> Self {
        Self {
            tags: Vec::new(),
            mode,
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub const fn mode(&self) -> TagMode {
        self.mode
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// The closed set of tags a selection may draw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    tags: Vec<String>,
}

impl TagVocabulary {
    #[must_use]
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Build a selection, rejecting tags outside the vocabulary
    ///
    /// Requested tags are lowercased first, since display names are
    /// matched in lowercase.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::UnknownTag` for a tag not in the vocabulary, or
    /// `FilterError::EmptyTag` for an empty one.
    pub fn selection(&self, requested: &[String], mode: TagMode) -> Result<FilterSelection, FilterError> {
        let mut tags = Vec::with_capacity(requested.len());
        for tag in requested {
            let tag = tag.to_lowercase();
            if tag.is_empty() {
                return Err(FilterError::EmptyTag);
            }
            if !self.contains(&tag) {
                return Err(FilterError::UnknownTag {
                    tag,
                    known: self.tags.join(", "),
                });
            }
            tags.push(tag);
        }
        FilterSelection::new(tags, mode)
    }
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TAGS.iter().map(|t| (*t).to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_collapses_duplicates() {
        let selection = FilterSelection::new(["+hdy", "+mini", "+hdy"], TagMode::All).unwrap();
        assert_eq!(selection.tags(), ["+hdy", "+mini"]);
    }

    #[test]
    fn test_selection_rejects_empty_tag() {
        let err = FilterSelection::new(["+mini", ""], TagMode::Any).unwrap_err();
        assert!(matches!(err, FilterError::EmptyTag));
    }

    #[test]
    fn test_default_vocabulary() {
        let vocab = TagVocabulary::default();
        assert_eq!(vocab.tags().len(), 17);
        assert!(vocab.tags().iter().all(|t| t.starts_with('+')));
        assert!(vocab.contains("+nopac"));
    }

    #[test]
    fn test_vocabulary_selection() {
        let vocab = TagVocabulary::default();
        let selection = vocab
            .selection(&["+MINI".to_string(), "+hdy".to_string()], TagMode::Any)
            .unwrap();
        assert_eq!(selection.tags(), ["+mini", "+hdy"]);
        assert_eq!(selection.mode(), TagMode::Any);

        let err = vocab
            .selection(&["+unknown".to_string()], TagMode::All)
            .unwrap_err();
        assert!(matches!(err, FilterError::UnknownTag { ref tag, .. } if tag == "+unknown"));
    }

    #[test]
    fn test_tag_mode_serde() {
        assert_eq!(serde_json::to_string(&TagMode::Any).unwrap(), "\"any\"");
        let mode: TagMode = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(mode, TagMode::All);
    }
}
