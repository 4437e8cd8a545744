//! Restaurant member (loyalty customer) record.

use crate::model::entity::{Entity, EntityKind};
use crate::model::fields::{Email, LoyaltyPoints, Name, Phone};
use serde::{Deserialize, Serialize};

/// Loyalty-programme member.
///
/// Identity is name + phone + email; loyalty points can change without the
/// record becoming a different member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    #[serde(default)]
    pub loyalty_points: LoyaltyPoints,
}

impl Member {
    /// Creates a member with zero loyalty points.
    pub fn new(name: Name, phone: Phone, email: Email) -> Self {
        Self {
            name,
            phone,
            email,
            loyalty_points: LoyaltyPoints::default(),
        }
    }

    pub fn with_points(mut self, points: LoyaltyPoints) -> Self {
        self.loyalty_points = points;
        self
    }
}

impl Entity for Member {
    const KIND: EntityKind = EntityKind::Member;

    fn is_same_identity(&self, other: &Self) -> bool {
        self.name == other.name && self.phone == other.phone && self.email == other.email
    }
}
