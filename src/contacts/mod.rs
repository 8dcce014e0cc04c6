//! Contact lists
//!
//! Typed contact records plus the CSV boundary on both sides: [`ingest`]
//! reads an exported contact list, [`export`] writes filtered results back
//! out.

pub mod error;
pub mod export;
pub mod ingest;
pub mod types;

pub use error::ContactError;
pub use types::{Contact, ContactCollection, UNKNOWN_COUNTRY};
