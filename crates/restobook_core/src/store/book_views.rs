//! The four per-kind views kept in step with the current snapshot.

use crate::model::booking::Booking;
use crate::model::ingredient::Ingredient;
use crate::model::member::Member;
use crate::model::staff::Staff;
use crate::store::history::SnapshotObserver;
use crate::store::snapshot::{BookEntity, Snapshot};
use crate::store::view::FilteredView;

/// One `FilteredView` per record kind.
#[derive(Debug)]
pub struct BookViews {
    pub members: FilteredView<Member>,
    pub staff: FilteredView<Staff>,
    pub ingredients: FilteredView<Ingredient>,
    pub bookings: FilteredView<Booking>,
}

impl BookViews {
    /// Unfiltered views over `snapshot`.
    pub fn new(snapshot: &Snapshot) -> Self {
        Self {
            members: FilteredView::new(snapshot.members().as_slice()),
            staff: FilteredView::new(snapshot.staff().as_slice()),
            ingredients: FilteredView::new(snapshot.ingredients().as_slice()),
            bookings: FilteredView::new(snapshot.bookings().as_slice()),
        }
    }

    /// Clears every predicate.
    pub fn show_all(&mut self, snapshot: &Snapshot) {
        self.members.show_all(snapshot.members().as_slice());
        self.staff.show_all(snapshot.staff().as_slice());
        self.ingredients.show_all(snapshot.ingredients().as_slice());
        self.bookings.show_all(snapshot.bookings().as_slice());
    }
}

impl SnapshotObserver for BookViews {
    /// Refreshes only the views whose source list actually changed.
    fn snapshot_replaced(&mut self, previous: &Snapshot, current: &Snapshot) {
        if previous.members() != current.members() {
            self.members.source_changed(current.members().as_slice());
        }
        if previous.staff() != current.staff() {
            self.staff.source_changed(current.staff().as_slice());
        }
        if previous.ingredients() != current.ingredients() {
            self.ingredients
                .source_changed(current.ingredients().as_slice());
        }
        if previous.bookings() != current.bookings() {
            self.bookings.source_changed(current.bookings().as_slice());
        }
    }
}

/// Record kinds that have a view in `BookViews`.
pub trait ViewedEntity: BookEntity {
    fn view_in(views: &BookViews) -> &FilteredView<Self>;
    fn view_in_mut(views: &mut BookViews) -> &mut FilteredView<Self>;
}

impl ViewedEntity for Member {
    fn view_in(views: &BookViews) -> &FilteredView<Self> {
        &views.members
    }

    fn view_in_mut(views: &mut BookViews) -> &mut FilteredView<Self> {
        &mut views.members
    }
}

impl ViewedEntity for Staff {
    fn view_in(views: &BookViews) -> &FilteredView<Self> {
        &views.staff
    }

    fn view_in_mut(views: &mut BookViews) -> &mut FilteredView<Self> {
        &mut views.staff
    }
}

impl ViewedEntity for Ingredient {
    fn view_in(views: &BookViews) -> &FilteredView<Self> {
        &views.ingredients
    }

    fn view_in_mut(views: &mut BookViews) -> &mut FilteredView<Self> {
        &mut views.ingredients
    }
}

impl ViewedEntity for Booking {
    fn view_in(views: &BookViews) -> &FilteredView<Self> {
        &views.bookings
    }

    fn view_in_mut(views: &mut BookViews) -> &mut FilteredView<Self> {
        &mut views.bookings
    }
}
