//! Restaurant book persistence boundary.
//!
//! # Responsibility
//! - Define the storage contract the session uses at start/end.
//! - Provide a JSON file implementation.
//!
//! # Invariants
//! - Storage is touched at session start and end, never per command.
//! - Loaded data passes the same uniqueness/field validation as live edits.

pub mod json_storage;
