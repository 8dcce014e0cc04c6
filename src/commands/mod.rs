//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args plus the loaded configuration.

pub mod filter;
pub mod preset;
pub mod tags;

// Re-export execute functions for convenience
pub use filter::execute as filter;
pub use preset::execute as preset;
pub use tags::execute as tags;
