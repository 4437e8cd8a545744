//! In-memory transactional record store.
//!
//! # Responsibility
//! - Enforce per-kind identity uniqueness (`UniqueEntityList`).
//! - Keep a linear undo/redo history of immutable snapshots.
//! - Maintain filtered, selection-tracking views over the current snapshot.
//! - Gate booking changes on restaurant capacity.
//!
//! # Invariants
//! - Single-threaded: every operation is synchronous and never blocks.
//! - Views never observe an intermediate state; they refresh after the
//!   history cursor has moved.

pub mod book_views;
pub mod capacity;
pub mod change;
pub mod error;
pub mod history;
pub mod snapshot;
pub mod unique_list;
pub mod view;
