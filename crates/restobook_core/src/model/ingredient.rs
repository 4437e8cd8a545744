//! Ingredient stock record.

use crate::model::entity::{Entity, EntityKind};
use crate::model::fields::{Name, Quantity, Unit};
use serde::{Deserialize, Serialize};

/// Ingredient kept in stock. Identity is the name, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: Name,
    pub quantity: Quantity,
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(name: Name, quantity: Quantity, unit: Unit) -> Self {
        Self {
            name,
            quantity,
            unit,
        }
    }

    /// Copy with `amount` more in stock; `None` on overflow.
    pub fn restocked(&self, amount: u32) -> Option<Self> {
        let quantity = self.quantity.checked_add(amount)?;
        Some(Self {
            quantity,
            ..self.clone()
        })
    }

    /// Copy with `amount` less in stock; `None` when stock is insufficient.
    pub fn consumed(&self, amount: u32) -> Option<Self> {
        let quantity = self.quantity.checked_sub(amount)?;
        Some(Self {
            quantity,
            ..self.clone()
        })
    }
}

impl Entity for Ingredient {
    const KIND: EntityKind = EntityKind::Ingredient;

    fn is_same_identity(&self, other: &Self) -> bool {
        self.name.eq_ignore_case(&other.name)
    }
}
