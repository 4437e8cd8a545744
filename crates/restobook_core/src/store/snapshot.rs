//! Whole-book state at one point in history.
//!
//! # Responsibility
//! - Hold one `UniqueEntityList` per record kind plus the capacity.
//! - Offer typed per-kind list access for kind-generic code.
//!
//! # Invariants
//! - A snapshot pushed into `VersionedStore` history is never mutated;
//!   edits happen on a cloned working copy.
//! - Equality is structural over all four lists and the capacity.

use crate::model::booking::Booking;
use crate::model::entity::{Entity, EntityKind, Record};
use crate::model::fields::Capacity;
use crate::model::ingredient::Ingredient;
use crate::model::member::Member;
use crate::model::staff::Staff;
use crate::store::error::ListResult;
use crate::store::unique_list::UniqueEntityList;

/// Restaurant book contents: four record lists and the capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    members: UniqueEntityList<Member>,
    staff: UniqueEntityList<Staff>,
    ingredients: UniqueEntityList<Ingredient>,
    bookings: UniqueEntityList<Booking>,
    capacity: Capacity,
}

impl Snapshot {
    /// Empty book with the given capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Assembles a snapshot from already-validated lists.
    pub fn from_parts(
        members: UniqueEntityList<Member>,
        staff: UniqueEntityList<Staff>,
        ingredients: UniqueEntityList<Ingredient>,
        bookings: UniqueEntityList<Booking>,
        capacity: Capacity,
    ) -> Self {
        Self {
            members,
            staff,
            ingredients,
            bookings,
            capacity,
        }
    }

    /// Overwrites every list and the capacity with copies from `other`.
    pub fn reset_data(&mut self, other: &Snapshot) {
        self.clone_from(other);
    }

    /// Typed list access, e.g. `snapshot.list::<Member>()`.
    pub fn list<T: BookEntity>(&self) -> &UniqueEntityList<T> {
        T::list_in(self)
    }

    pub fn list_mut<T: BookEntity>(&mut self) -> &mut UniqueEntityList<T> {
        T::list_in_mut(self)
    }

    pub fn members(&self) -> &UniqueEntityList<Member> {
        &self.members
    }

    pub fn staff(&self) -> &UniqueEntityList<Staff> {
        &self.staff
    }

    pub fn ingredients(&self) -> &UniqueEntityList<Ingredient> {
        &self.ingredients
    }

    pub fn bookings(&self) -> &UniqueEntityList<Booking> {
        &self.bookings
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: Capacity) {
        self.capacity = capacity;
    }

    /// Number of records of `kind`.
    pub fn len_of(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Member => self.members.len(),
            EntityKind::Staff => self.staff.len(),
            EntityKind::Ingredient => self.ingredients.len(),
            EntityKind::Booking => self.bookings.len(),
        }
    }

    /// Appends a record to the list of its kind.
    pub fn add_record(&mut self, record: Record) -> ListResult<()> {
        match record {
            Record::Member(member) => self.members.add(member),
            Record::Staff(staff) => self.staff.add(staff),
            Record::Ingredient(ingredient) => self.ingredients.add(ingredient),
            Record::Booking(booking) => self.bookings.add(booking),
        }
    }
}

/// Record kinds stored in a `Snapshot`, mapping each type to its list.
pub trait BookEntity: Entity {
    fn list_in(snapshot: &Snapshot) -> &UniqueEntityList<Self>;
    fn list_in_mut(snapshot: &mut Snapshot) -> &mut UniqueEntityList<Self>;
}

impl BookEntity for Member {
    fn list_in(snapshot: &Snapshot) -> &UniqueEntityList<Self> {
        &snapshot.members
    }

    fn list_in_mut(snapshot: &mut Snapshot) -> &mut UniqueEntityList<Self> {
        &mut snapshot.members
    }
}

impl BookEntity for Staff {
    fn list_in(snapshot: &Snapshot) -> &UniqueEntityList<Self> {
        &snapshot.staff
    }

    fn list_in_mut(snapshot: &mut Snapshot) -> &mut UniqueEntityList<Self> {
        &mut snapshot.staff
    }
}

impl BookEntity for Ingredient {
    fn list_in(snapshot: &Snapshot) -> &UniqueEntityList<Self> {
        &snapshot.ingredients
    }

    fn list_in_mut(snapshot: &mut Snapshot) -> &mut UniqueEntityList<Self> {
        &mut snapshot.ingredients
    }
}

impl BookEntity for Booking {
    fn list_in(snapshot: &Snapshot) -> &UniqueEntityList<Self> {
        &snapshot.bookings
    }

    fn list_in_mut(snapshot: &mut Snapshot) -> &mut UniqueEntityList<Self> {
        &mut snapshot.bookings
    }
}
