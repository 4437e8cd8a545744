//! Restaurant book use-case facade.
//!
//! # Responsibility
//! - Provide the mutating entry points the command layer calls.
//! - Turn each successful mutation into exactly one history commit.
//! - Keep the four record views in step with the current snapshot.
//!
//! # Invariants
//! - Every mutation edits a cloned working copy of the current snapshot;
//!   a failed mutation never commits and never touches a view.
//! - Booking additions and edits pass the capacity guard before commit.
//! - The model is handed to callers explicitly; there is no global state.

use crate::model::booking::Booking;
use crate::model::entity::{Entity, EntityKind};
use crate::model::fields::{Capacity, FieldError};
use crate::model::ingredient::Ingredient;
use crate::model::member::Member;
use crate::model::staff::Staff;
use crate::store::book_views::{BookViews, ViewedEntity};
use crate::store::capacity::{CapacityGuard, WindowPolicy};
use crate::store::error::{HistoryError, ListError, ViewError};
use crate::store::history::VersionedStore;
use crate::store::snapshot::{BookEntity, Snapshot};
use crate::store::view::{FilteredView, Predicate};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Failure of a restaurant book use-case. Every variant is an expected,
/// recoverable outcome reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A field value failed validation.
    Field(FieldError),
    /// A record with the same identity already exists.
    DuplicateEntity(EntityKind),
    /// The target record is no longer in the book.
    EntityNotFound(EntityKind),
    /// The booking would push concurrent guests above capacity.
    CapacityExceeded {
        requested: u32,
        concurrent: u32,
        capacity: u32,
    },
    /// Some existing booking plus those concurrent with it exceed the new
    /// capacity.
    CapacityBelowBookings { capacity: u32, peak: u32 },
    /// The booking's customer is not a member of the restaurant.
    BookingMemberMissing,
    /// Not enough ingredient in stock.
    StockUnderflow { available: u32, requested: u32 },
    /// Restocking would overflow the stock counter.
    StockOverflow,
    NoMoreUndo,
    NoMoreRedo,
    /// The record is not in the displayed list.
    NotInView(EntityKind),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(err) => write!(f, "{err}"),
            Self::DuplicateEntity(kind) => {
                write!(f, "this {kind} already exists in the restaurant book")
            }
            Self::EntityNotFound(kind) => {
                write!(f, "the {kind} was not found in the restaurant book")
            }
            Self::CapacityExceeded {
                requested,
                concurrent,
                capacity,
            } => write!(
                f,
                "restaurant would be overbooked: {requested} guests would bring concurrent guests to {concurrent} (capacity {capacity})"
            ),
            Self::CapacityBelowBookings { capacity, peak } => write!(
                f,
                "capacity {capacity} is below existing bookings: one booking and those overlapping it hold {peak} guests"
            ),
            Self::BookingMemberMissing => {
                write!(f, "the booking customer is not a member of the restaurant")
            }
            Self::StockUnderflow {
                available,
                requested,
            } => write!(
                f,
                "not enough stock: requested {requested}, only {available} available"
            ),
            Self::StockOverflow => write!(f, "stock quantity is too large"),
            Self::NoMoreUndo => write!(f, "no more commands to undo"),
            Self::NoMoreRedo => write!(f, "no more commands to redo"),
            Self::NotInView(kind) => write!(f, "the {kind} is not in the displayed list"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for ModelError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

impl From<ListError> for ModelError {
    fn from(value: ListError) -> Self {
        match value {
            ListError::DuplicateEntity(kind) => Self::DuplicateEntity(kind),
            ListError::EntityNotFound(kind) => Self::EntityNotFound(kind),
        }
    }
}

impl From<HistoryError> for ModelError {
    fn from(value: HistoryError) -> Self {
        match value {
            HistoryError::NoMoreUndo => Self::NoMoreUndo,
            HistoryError::NoMoreRedo => Self::NoMoreRedo,
        }
    }
}

impl From<ViewError> for ModelError {
    fn from(value: ViewError) -> Self {
        match value {
            ViewError::NotInView(kind) => Self::NotInView(kind),
        }
    }
}

/// Versioned restaurant book plus its live views.
#[derive(Debug)]
pub struct RestaurantModel {
    store: VersionedStore,
    views: BookViews,
    guard: CapacityGuard,
}

impl RestaurantModel {
    /// Starts a session with `initial` as the only history entry.
    pub fn new(initial: Snapshot, policy: WindowPolicy) -> Self {
        let views = BookViews::new(&initial);
        Self {
            store: VersionedStore::new(initial),
            views,
            guard: CapacityGuard::new(policy),
        }
    }

    /// Snapshot at the history cursor; also the one storage writes out.
    pub fn current(&self) -> &Snapshot {
        self.store.current()
    }

    pub fn capacity_guard(&self) -> CapacityGuard {
        self.guard
    }

    pub fn history_len(&self) -> usize {
        self.store.len()
    }

    // ── Members ─────────────────────────────────────────────

    pub fn has_member(&self, member: &Member) -> bool {
        self.current().members().contains(member)
    }

    pub fn add_member(&mut self, member: Member) -> ModelResult<()> {
        self.add_entity(member)
    }

    /// Replaces `target`; existing bookings keep their customer copy.
    pub fn set_member(&mut self, target: &Member, edited: Member) -> ModelResult<()> {
        self.set_entity(target, edited)
    }

    pub fn delete_member(&mut self, target: &Member) -> ModelResult<()> {
        self.delete_entity(target)
    }

    // ── Staff ───────────────────────────────────────────────

    pub fn has_staff(&self, staff: &Staff) -> bool {
        self.current().staff().contains(staff)
    }

    pub fn add_staff(&mut self, staff: Staff) -> ModelResult<()> {
        self.add_entity(staff)
    }

    pub fn set_staff(&mut self, target: &Staff, edited: Staff) -> ModelResult<()> {
        self.set_entity(target, edited)
    }

    pub fn delete_staff(&mut self, target: &Staff) -> ModelResult<()> {
        self.delete_entity(target)
    }

    // ── Ingredients ─────────────────────────────────────────

    pub fn has_ingredient(&self, ingredient: &Ingredient) -> bool {
        self.current().ingredients().contains(ingredient)
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> ModelResult<()> {
        self.add_entity(ingredient)
    }

    pub fn set_ingredient(&mut self, target: &Ingredient, edited: Ingredient) -> ModelResult<()> {
        self.set_entity(target, edited)
    }

    pub fn delete_ingredient(&mut self, target: &Ingredient) -> ModelResult<()> {
        self.delete_entity(target)
    }

    /// Adds `amount` to the stock of `target`.
    pub fn restock_ingredient(&mut self, target: &Ingredient, amount: u32) -> ModelResult<()> {
        let edited = target.restocked(amount).ok_or(ModelError::StockOverflow)?;
        self.set_entity(target, edited)
    }

    /// Takes `amount` out of the stock of `target`.
    pub fn consume_ingredient(&mut self, target: &Ingredient, amount: u32) -> ModelResult<()> {
        let edited = target
            .consumed(amount)
            .ok_or(ModelError::StockUnderflow {
                available: target.quantity.value(),
                requested: amount,
            })?;
        self.set_entity(target, edited)
    }

    // ── Bookings ────────────────────────────────────────────

    pub fn has_booking(&self, booking: &Booking) -> bool {
        self.current().bookings().contains(booking)
    }

    /// Adds a booking for an existing member if capacity allows.
    ///
    /// # Errors
    /// - `BookingMemberMissing` when the customer is not a member.
    /// - `DuplicateEntity` when the same customer already booked that time.
    /// - `CapacityExceeded` when concurrent guests would exceed capacity.
    pub fn add_booking(&mut self, booking: Booking) -> ModelResult<()> {
        let current = self.current();
        if !current.members().contains(&booking.customer) {
            return Err(ModelError::BookingMemberMissing);
        }
        if current.bookings().contains(&booking) {
            return Err(self.reject_duplicate(EntityKind::Booking));
        }
        let capacity = current.capacity();
        if !self
            .guard
            .can_accommodate(&booking, current.bookings().as_slice(), capacity)
        {
            let concurrent = self
                .guard
                .concurrent_guests(&booking, current.bookings().as_slice());
            return Err(reject_capacity(booking.guests(), concurrent, capacity));
        }
        self.add_entity(booking)
    }

    /// Replaces `target`, checking capacity against the other bookings only.
    ///
    /// A changed customer must be a member; an unchanged one keeps its
    /// booking-time copy even if the member record was edited since.
    pub fn set_booking(&mut self, target: &Booking, edited: Booking) -> ModelResult<()> {
        let current = self.current();
        if current.bookings().position_of(target).is_none() {
            return Err(ModelError::EntityNotFound(EntityKind::Booking));
        }
        let customer_changed = !target.customer.is_same_identity(&edited.customer);
        if customer_changed && !current.members().contains(&edited.customer) {
            return Err(ModelError::BookingMemberMissing);
        }
        let capacity = current.capacity();
        if !self.guard.can_accommodate_edit(
            target,
            &edited,
            current.bookings().as_slice(),
            capacity,
        ) {
            let others: Vec<Booking> = current
                .bookings()
                .iter()
                .filter(|booking| *booking != target)
                .cloned()
                .collect();
            let concurrent = self.guard.concurrent_guests(&edited, &others);
            return Err(reject_capacity(edited.guests(), concurrent, capacity));
        }
        self.set_entity(target, edited)
    }

    pub fn delete_booking(&mut self, target: &Booking) -> ModelResult<()> {
        self.delete_entity(target)
    }

    // ── Capacity ────────────────────────────────────────────

    /// Changes the restaurant capacity; the current value is a no-op.
    ///
    /// Existing bookings are measured the same way booking edits are, so
    /// an accepted capacity never blocks an unchanged booking.
    ///
    /// # Errors
    /// - `CapacityBelowBookings` when some booking and the bookings
    ///   concurrent with it need more seats than `capacity`.
    pub fn set_capacity(&mut self, capacity: Capacity) -> ModelResult<()> {
        if self.current().capacity() == capacity {
            return Ok(());
        }
        let peak = self
            .guard
            .peak_concurrent_guests(self.current().bookings().as_slice());
        if peak > capacity.value() {
            warn!(
                "event=capacity_rejected module=model status=rejected op=set_capacity capacity={} peak={}",
                capacity, peak
            );
            return Err(ModelError::CapacityBelowBookings {
                capacity: capacity.value(),
                peak,
            });
        }
        let mut next = self.current().clone();
        next.set_capacity(capacity);
        self.commit(next, "set_capacity", "capacity");
        Ok(())
    }

    // ── History ─────────────────────────────────────────────

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    pub fn undo(&mut self) -> ModelResult<()> {
        self.store.undo(&mut self.views)?;
        info!(
            "event=undo module=model status=ok cursor={} history={}",
            self.store.cursor(),
            self.store.len()
        );
        Ok(())
    }

    pub fn redo(&mut self) -> ModelResult<()> {
        self.store.redo(&mut self.views)?;
        info!(
            "event=redo module=model status=ok cursor={} history={}",
            self.store.cursor(),
            self.store.len()
        );
        Ok(())
    }

    /// Replaces the whole book with `snapshot` as one undoable commit;
    /// an identical snapshot leaves history untouched.
    pub fn reset_data(&mut self, snapshot: &Snapshot) {
        if self.current() == snapshot {
            return;
        }
        let mut next = self.current().clone();
        next.reset_data(snapshot);
        self.commit(next, "reset_data", "book");
    }

    // ── Views ───────────────────────────────────────────────

    /// Read access to the view of one record kind.
    pub fn view<T: ViewedEntity>(&self) -> &FilteredView<T> {
        T::view_in(&self.views)
    }

    /// Mutable view access, e.g. for subscribing listeners.
    pub fn view_mut<T: ViewedEntity>(&mut self) -> &mut FilteredView<T> {
        T::view_in_mut(&mut self.views)
    }

    pub fn members(&self) -> &FilteredView<Member> {
        &self.views.members
    }

    pub fn staff(&self) -> &FilteredView<Staff> {
        &self.views.staff
    }

    pub fn ingredients(&self) -> &FilteredView<Ingredient> {
        &self.views.ingredients
    }

    pub fn bookings(&self) -> &FilteredView<Booking> {
        &self.views.bookings
    }

    /// Filters the view of `T` by `predicate`.
    pub fn update_filtered<T: ViewedEntity>(&mut self, predicate: Predicate<T>) {
        let source = T::list_in(self.store.current()).as_slice();
        T::view_in_mut(&mut self.views).set_predicate(predicate, source);
    }

    /// Removes the predicate from every view.
    pub fn show_all(&mut self) {
        self.views.show_all(self.store.current());
    }

    /// Selects a visible record of kind `T`, or clears with `None`.
    pub fn select<T: ViewedEntity>(&mut self, item: Option<T>) -> ModelResult<()> {
        T::view_in_mut(&mut self.views).set_selected(item)?;
        Ok(())
    }

    // ── Internals ───────────────────────────────────────────

    fn add_entity<T: BookEntity>(&mut self, item: T) -> ModelResult<()> {
        let mut next = self.current().clone();
        if let Err(err) = next.list_mut::<T>().add(item) {
            return Err(self.reject_list(err));
        }
        self.commit(next, "add", T::KIND.as_str());
        Ok(())
    }

    fn set_entity<T: BookEntity>(&mut self, target: &T, edited: T) -> ModelResult<()> {
        let mut next = self.current().clone();
        if let Err(err) = next.list_mut::<T>().set_item(target, edited) {
            return Err(self.reject_list(err));
        }
        self.commit(next, "set", T::KIND.as_str());
        Ok(())
    }

    fn delete_entity<T: BookEntity>(&mut self, target: &T) -> ModelResult<()> {
        let mut next = self.current().clone();
        if let Err(err) = next.list_mut::<T>().remove(target) {
            return Err(self.reject_list(err));
        }
        self.commit(next, "delete", T::KIND.as_str());
        Ok(())
    }

    fn commit(&mut self, next: Snapshot, op: &'static str, target: &'static str) {
        self.store.commit(next, &mut self.views);
        info!(
            "event=commit module=model status=ok op={} target={} cursor={} history={}",
            op,
            target,
            self.store.cursor(),
            self.store.len()
        );
    }

    fn reject_list(&self, err: ListError) -> ModelError {
        match err {
            ListError::DuplicateEntity(kind) => self.reject_duplicate(kind),
            ListError::EntityNotFound(kind) => {
                warn!(
                    "event=not_found_rejected module=model status=rejected kind={}",
                    kind
                );
                err.into()
            }
        }
    }

    fn reject_duplicate(&self, kind: EntityKind) -> ModelError {
        warn!(
            "event=duplicate_rejected module=model status=rejected kind={}",
            kind
        );
        ModelError::DuplicateEntity(kind)
    }
}

fn reject_capacity(requested: u32, concurrent: u32, capacity: Capacity) -> ModelError {
    warn!(
        "event=capacity_rejected module=model status=rejected requested={} concurrent={} capacity={}",
        requested, concurrent, capacity
    );
    ModelError::CapacityExceeded {
        requested,
        concurrent,
        capacity: capacity.value(),
    }
}
