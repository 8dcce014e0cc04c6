//! Tag filtering
//!
//! Narrows a [`ContactCollection`](crate::contacts::ContactCollection) by
//! tag markers embedded in display names (e.g. `alice +mini +hdy`).
//!
//! - **ALL** (AND): a contact must carry every selected tag
//! - **ANY** (OR): a contact must carry at least one selected tag
//!
//! Matching is a case-insensitive literal substring test: names are
//! lowercased at ingestion and tags are lowercased by the vocabulary.

pub mod engine;
pub mod error;
pub mod types;

pub use engine::{ContactFilterExt, filter};
pub use error::FilterError;
pub use types::{DEFAULT_TAGS, FilterSelection, TagMode, TagVocabulary};
