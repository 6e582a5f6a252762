//! Internal implementation modules for `atlas-core`.
//!
//! Callers should go through the re-exports in the crate root rather than
//! importing these modules directly.

pub mod config;
pub mod runtime;
pub mod tooling;
