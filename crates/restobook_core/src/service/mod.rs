//! Use-case layer over the record store.
//!
//! # Responsibility
//! - Expose restaurant book operations to the command layer.
//! - Keep command-level rules (membership, capacity, stock) out of the
//!   generic store.
//!
//! # Invariants
//! - Service APIs never bypass `UniqueEntityList` validation or the
//!   versioned history.

pub mod restaurant_model;
pub mod sample_data;
