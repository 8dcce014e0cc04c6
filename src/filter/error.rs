//! Error types for tag filtering

use thiserror::Error;

/// Errors that can occur while building or applying a tag filter
#[derive(Debug, Error)]
pub enum FilterError {
    /// An empty tag would match every contact
    #[error("Tag cannot be empty")]
    EmptyTag,

    /// Tag is not part of the configured vocabulary
    #[error("Unknown tag '{tag}' (known tags: {known})")]
    UnknownTag { tag: String, known: String },

    /// Matcher could not be compiled
    #[error("Failed to build matcher for '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

impl FilterError {
    pub(crate) fn pattern(pattern: &str, err: &regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}
