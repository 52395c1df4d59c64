//! Persisted document store — the launch core's read-only collaborator.
//!
//! The frontend UI owns these documents; this crate only deserializes
//! and validates them. All reads return explicit `Result`s so the
//! launch pipeline can be driven by any store location (the tests use
//! temporary directories).

mod loader;
mod types;

pub use loader::{Store, StoreError};
pub use types::{EntryKind, Package, SelectionEntry, Settings, SourcePort};
