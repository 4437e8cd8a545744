//! Restaurant staff record.

use crate::model::entity::{Entity, EntityKind};
use crate::model::fields::{Address, Email, Name, Phone, Rating};
use serde::{Deserialize, Serialize};

/// Staff member. Identity is name + phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub rating: Rating,
}

impl Staff {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, rating: Rating) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            rating,
        }
    }
}

impl Entity for Staff {
    const KIND: EntityKind = EntityKind::Staff;

    fn is_same_identity(&self, other: &Self) -> bool {
        self.name == other.name && self.phone == other.phone
    }
}
