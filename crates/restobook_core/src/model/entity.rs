//! Entity kinds, identity contract and the closed record union.
//!
//! # Responsibility
//! - Define the identity predicate every stored record type implements.
//! - Provide a closed tagged union for kind-generic call sites.
//!
//! # Invariants
//! - `is_same_identity` is weaker than (implied by) full equality.
//! - Kind dispatch is always an exhaustive `match`, never runtime type
//!   inspection.

use crate::model::booking::Booking;
use crate::model::ingredient::Ingredient;
use crate::model::member::Member;
use crate::model::staff::Staff;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// The four record kinds kept in a restaurant book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Member,
    Staff,
    Ingredient,
    Booking,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Member,
        EntityKind::Staff,
        EntityKind::Ingredient,
        EntityKind::Booking,
    ];

    /// Stable lowercase id used in log lines and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Staff => "staff",
            Self::Ingredient => "ingredient",
            Self::Booking => "booking",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract shared by every record type stored in a `UniqueEntityList`.
///
/// Full equality (`PartialEq`) locates exact records for removal and
/// replacement; `is_same_identity` decides whether two records describe the
/// same real-world thing and drives uniqueness.
pub trait Entity: Clone + PartialEq + Debug {
    const KIND: EntityKind;

    fn is_same_identity(&self, other: &Self) -> bool;
}

/// Any one restaurant record, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Member(Member),
    Staff(Staff),
    Ingredient(Ingredient),
    Booking(Booking),
}

impl From<Member> for Record {
    fn from(value: Member) -> Self {
        Self::Member(value)
    }
}

impl From<Staff> for Record {
    fn from(value: Staff) -> Self {
        Self::Staff(value)
    }
}

impl From<Ingredient> for Record {
    fn from(value: Ingredient) -> Self {
        Self::Ingredient(value)
    }
}

impl From<Booking> for Record {
    fn from(value: Booking) -> Self {
        Self::Booking(value)
    }
}
