//! Booking capacity checks.
//!
//! # Responsibility
//! - Decide whether a new or edited booking fits the restaurant capacity.
//! - Own the configurable "which bookings are concurrent" rule.
//!
//! # Invariants
//! - Checks are pure: they never mutate inputs and never fail; callers
//!   turn `false` into a user-facing rejection.
//! - The concurrent-guest total always includes the candidate itself.

use crate::model::booking::{Booking, TimeWindow};
use crate::model::fields::Capacity;
use serde::{Deserialize, Serialize};

/// Rule deciding whether two bookings consume capacity at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Each booking's own `[start, start + duration)` windows overlap.
    #[default]
    Overlap,
    /// Every booking occupies a fixed seating length from its start.
    FixedSeating { minutes: u32 },
    /// All bookings on the same calendar date share capacity.
    SameDay,
}

impl WindowPolicy {
    /// Window a booking occupies under this policy.
    pub fn window_of(&self, booking: &Booking) -> TimeWindow {
        match self {
            Self::Overlap | Self::SameDay => booking.window(),
            Self::FixedSeating { minutes } => {
                TimeWindow::new(booking.start.value(), booking.start.plus_minutes(*minutes))
            }
        }
    }

    pub fn concurrent(&self, a: &Booking, b: &Booking) -> bool {
        match self {
            Self::SameDay => a.start.date() == b.start.date(),
            Self::Overlap | Self::FixedSeating { .. } => {
                self.window_of(a).overlaps(&self.window_of(b))
            }
        }
    }
}

/// Capacity gate applied before booking mutations are committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapacityGuard {
    policy: WindowPolicy,
}

impl CapacityGuard {
    pub fn new(policy: WindowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> WindowPolicy {
        self.policy
    }

    /// Guests concurrent with `candidate`, the candidate included.
    pub fn concurrent_guests(&self, candidate: &Booking, existing: &[Booking]) -> u32 {
        self.sum_concurrent(candidate, existing.iter())
    }

    /// True when adding `candidate` keeps its concurrent total within
    /// `capacity`.
    pub fn can_accommodate(&self, candidate: &Booking, existing: &[Booking], capacity: Capacity) -> bool {
        self.concurrent_guests(candidate, existing) <= capacity.value()
    }

    /// Like `can_accommodate`, but `original` is taken out of `existing`
    /// first so an edit is only checked against the other bookings.
    pub fn can_accommodate_edit(
        &self,
        original: &Booking,
        edited: &Booking,
        existing: &[Booking],
        capacity: Capacity,
    ) -> bool {
        let skip = existing.iter().position(|booking| booking == original);
        let others = existing
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != skip)
            .map(|(_, booking)| booking);
        self.sum_concurrent(edited, others) <= capacity.value()
    }

    /// Largest concurrent-guest total any booking sees against the others.
    ///
    /// Measured exactly as `can_accommodate_edit` measures a booking, so a
    /// capacity at or above this value accepts every existing booking
    /// unchanged. Returns `0` for an empty list.
    pub fn peak_concurrent_guests(&self, bookings: &[Booking]) -> u32 {
        bookings
            .iter()
            .enumerate()
            .map(|(index, booking)| {
                let others = bookings
                    .iter()
                    .enumerate()
                    .filter(move |(other, _)| *other != index)
                    .map(|(_, other)| other);
                self.sum_concurrent(booking, others)
            })
            .max()
            .unwrap_or(0)
    }

    fn sum_concurrent<'a>(&self, candidate: &Booking, others: impl Iterator<Item = &'a Booking>) -> u32 {
        others
            .filter(|booking| self.policy.concurrent(candidate, booking))
            .fold(candidate.guests(), |total, booking| {
                total.saturating_add(booking.guests())
            })
    }
}
