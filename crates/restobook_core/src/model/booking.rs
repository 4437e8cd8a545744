//! Table booking record and its time window.
//!
//! # Invariants
//! - `customer` is a value copy taken at booking time; later edits to the
//!   stored member never change an existing booking.
//! - A window is half-open `[start, end)`; `start == end` is a point booking.

use crate::model::entity::{Entity, EntityKind};
use crate::model::fields::{BookingSize, BookingTime};
use crate::model::member::Member;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A guest group booked for a start time and duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub customer: Member,
    pub start: BookingTime,
    /// Length of stay in minutes; `0` books a single instant.
    #[serde(default)]
    pub duration_minutes: u32,
    pub size: BookingSize,
}

impl Booking {
    pub fn new(customer: Member, start: BookingTime, duration_minutes: u32, size: BookingSize) -> Self {
        Self {
            customer,
            start,
            duration_minutes,
            size,
        }
    }

    /// Occupied window as declared by the booking itself.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start.value(), self.start.plus_minutes(self.duration_minutes))
    }

    pub fn guests(&self) -> u32 {
        self.size.value()
    }
}

impl Entity for Booking {
    const KIND: EntityKind = EntityKind::Booking;

    /// Same customer at the same start time is the same booking.
    fn is_same_identity(&self, other: &Self) -> bool {
        self.customer.is_same_identity(&other.customer) && self.start == other.start
    }
}

/// Half-open interval `[start, end)` of restaurant time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start <= end, "TimeWindow start must not be after end");
        Self { start, end }
    }

    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// True unless the two windows are disjoint.
    ///
    /// Point windows meet other points at the same instant and ranges that
    /// contain the instant; adjacent ranges do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        match (self.is_point(), other.is_point()) {
            (true, true) => self.start == other.start,
            (true, false) => other.contains_instant(self.start),
            (false, true) => self.contains_instant(other.start),
            (false, false) => self.start < other.end && other.start < self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> NaiveDateTime {
        BookingTime::parse(value).unwrap().value()
    }

    #[test]
    fn ranges_overlap_but_adjacent_do_not() {
        let lunch = TimeWindow::new(at("2024-03-01 12:00"), at("2024-03-01 13:00"));
        let late_lunch = TimeWindow::new(at("2024-03-01 12:30"), at("2024-03-01 13:30"));
        let after = TimeWindow::new(at("2024-03-01 13:00"), at("2024-03-01 14:00"));
        assert!(lunch.overlaps(&late_lunch));
        assert!(!lunch.overlaps(&after));
    }

    #[test]
    fn points_meet_only_same_instant_or_containing_range() {
        let noon = TimeWindow::new(at("2024-03-01 12:00"), at("2024-03-01 12:00"));
        let also_noon = noon;
        let later = TimeWindow::new(at("2024-03-01 12:01"), at("2024-03-01 12:01"));
        let lunch = TimeWindow::new(at("2024-03-01 11:30"), at("2024-03-01 12:30"));
        let ends_at_noon = TimeWindow::new(at("2024-03-01 11:00"), at("2024-03-01 12:00"));
        assert!(noon.overlaps(&also_noon));
        assert!(!noon.overlaps(&later));
        assert!(noon.overlaps(&lunch));
        assert!(lunch.overlaps(&noon));
        assert!(!noon.overlaps(&ends_at_noon));
    }
}
