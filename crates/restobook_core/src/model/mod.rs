//! Restaurant domain model.
//!
//! # Responsibility
//! - Define the four record kinds (members, staff, ingredients, bookings).
//! - Define validated field value objects and view predicates.
//!
//! # Invariants
//! - Every record kind implements `Entity` with an identity rule weaker
//!   than full equality.
//! - Records are plain values; no record holds a live reference to another.

pub mod booking;
pub mod entity;
pub mod fields;
pub mod ingredient;
pub mod member;
pub mod predicates;
pub mod staff;
