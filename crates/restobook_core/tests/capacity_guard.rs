use restobook_core::{
    Booking, BookingSize, BookingTime, Capacity, CapacityGuard, Email, Member, Name, Phone,
    WindowPolicy,
};

fn member(name: &str, phone: &str) -> Member {
    Member::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse("guest@example.com").unwrap(),
    )
}

fn booking(customer: &Member, start: &str, minutes: u32, size: u32) -> Booking {
    Booking::new(
        customer.clone(),
        BookingTime::parse(start).unwrap(),
        minutes,
        BookingSize::new(size).unwrap(),
    )
}

fn capacity(value: u32) -> Capacity {
    Capacity::new(value).unwrap()
}

#[test]
fn sums_only_concurrent_bookings() {
    let guard = CapacityGuard::default();
    let alice = member("Alice", "111");
    let bob = member("Bob", "222");
    let existing = vec![
        booking(&alice, "2024-03-01 14:30", 120, 5),
        booking(&bob, "2024-03-01 18:00", 60, 8),
    ];

    let candidate = booking(&member("Carl", "333"), "2024-03-01 15:00", 60, 4);
    assert_eq!(guard.concurrent_guests(&candidate, &existing), 9);
    assert!(guard.can_accommodate(&candidate, &existing, capacity(9)));
    assert!(!guard.can_accommodate(&candidate, &existing, capacity(8)));
}

#[test]
fn empty_book_only_counts_candidate() {
    let guard = CapacityGuard::default();
    let candidate = booking(&member("Alice", "111"), "2024-03-01 12:00", 60, 10);
    assert!(guard.can_accommodate(&candidate, &[], capacity(10)));
    assert!(!guard.can_accommodate(&candidate, &[], capacity(9)));
}

#[test]
fn edit_is_checked_against_other_bookings_only() {
    let guard = CapacityGuard::default();
    let alice = member("Alice", "111");
    let bob = member("Bob", "222");
    let original = booking(&alice, "2024-03-01 14:30", 120, 5);
    let existing = vec![original.clone(), booking(&bob, "2024-03-01 15:00", 60, 4)];

    let grown = booking(&alice, "2024-03-01 14:30", 120, 9);
    assert!(guard.can_accommodate_edit(&original, &grown, &existing, capacity(13)));
    // Counting the original too would double-book Alice's own seats.
    assert!(!guard.can_accommodate(&grown, &existing, capacity(13)));

    let too_big = booking(&alice, "2024-03-01 14:30", 120, 10);
    assert!(!guard.can_accommodate_edit(&original, &too_big, &existing, capacity(13)));
}

#[test]
fn moving_a_booking_away_frees_capacity() {
    let guard = CapacityGuard::default();
    let alice = member("Alice", "111");
    let bob = member("Bob", "222");
    let original = booking(&alice, "2024-03-01 14:30", 60, 8);
    let existing = vec![original.clone(), booking(&bob, "2024-03-01 19:00", 60, 8)];

    let clash = booking(&alice, "2024-03-01 19:30", 60, 8);
    assert!(!guard.can_accommodate_edit(&original, &clash, &existing, capacity(10)));
    let apart = booking(&alice, "2024-03-01 21:00", 60, 8);
    assert!(guard.can_accommodate_edit(&original, &apart, &existing, capacity(10)));
}

#[test]
fn point_bookings_are_concurrent_with_same_instant_only() {
    let guard = CapacityGuard::default();
    let existing = vec![booking(&member("Alice", "111"), "2024-03-01 12:00", 0, 6)];

    let same = booking(&member("Bob", "222"), "2024-03-01 12:00", 0, 6);
    let later = booking(&member("Bob", "222"), "2024-03-01 12:01", 0, 6);
    assert!(!guard.can_accommodate(&same, &existing, capacity(10)));
    assert!(guard.can_accommodate(&later, &existing, capacity(10)));
}

#[test]
fn fixed_seating_policy_ignores_declared_duration() {
    let guard = CapacityGuard::new(WindowPolicy::FixedSeating { minutes: 120 });
    let existing = vec![booking(&member("Alice", "111"), "2024-03-01 12:00", 0, 6)];

    let candidate = booking(&member("Bob", "222"), "2024-03-01 13:30", 0, 6);
    assert_eq!(guard.concurrent_guests(&candidate, &existing), 12);
    assert_eq!(CapacityGuard::default().concurrent_guests(&candidate, &existing), 6);
}

#[test]
fn same_day_policy_groups_by_date() {
    let guard = CapacityGuard::new(WindowPolicy::SameDay);
    let existing = vec![
        booking(&member("Alice", "111"), "2024-03-01 09:00", 30, 6),
        booking(&member("Bob", "222"), "2024-03-02 21:00", 30, 6),
    ];

    let candidate = booking(&member("Carl", "333"), "2024-03-01 22:00", 30, 3);
    assert_eq!(guard.concurrent_guests(&candidate, &existing), 9);
}

#[test]
fn peak_reports_largest_concurrent_group() {
    let guard = CapacityGuard::default();
    let bookings = vec![
        booking(&member("Alice", "111"), "2024-03-01 12:00", 60, 4),
        booking(&member("Bob", "222"), "2024-03-01 12:30", 60, 5),
        booking(&member("Carl", "333"), "2024-03-01 18:00", 60, 2),
    ];
    assert_eq!(guard.peak_concurrent_guests(&bookings), 9);
    assert_eq!(guard.peak_concurrent_guests(&[]), 0);
}

#[test]
fn accepted_sequence_never_exceeds_capacity() {
    let guard = CapacityGuard::default();
    let cap = capacity(12);
    let mut accepted: Vec<Booking> = Vec::new();
    let starts = ["12:00", "12:15", "12:30", "12:45", "13:00", "13:15"];

    for (index, start) in starts.iter().enumerate() {
        let guest = member(&format!("Guest {index}"), &format!("90{index}"));
        let candidate = booking(&guest, &format!("2024-03-01 {start}"), 60, 3 + (index as u32 % 3));
        if guard.can_accommodate(&candidate, &accepted, cap) {
            accepted.push(candidate);
        }
    }

    assert!(!accepted.is_empty());
    for probe in &accepted {
        let instant = probe.start.value();
        let present: u32 = accepted
            .iter()
            .filter(|booking| booking.window().contains_instant(instant))
            .map(Booking::guests)
            .sum();
        assert!(present <= cap.value(), "{present} guests at {}", probe.start);
    }
}

#[test]
fn peak_matches_the_edit_check_for_every_booking() {
    let guard = CapacityGuard::default();
    let early = booking(&member("Alice", "111"), "2024-03-01 12:00", 60, 5);
    let late = booking(&member("Carl", "333"), "2024-03-01 13:00", 60, 5);
    let bridge = booking(&member("Bob", "222"), "2024-03-01 12:30", 60, 3);
    let bookings = vec![early, late, bridge.clone()];

    // No instant holds more than 8 guests, but the bridging booking
    // overlaps both others.
    assert_eq!(guard.peak_concurrent_guests(&bookings), 13);
    assert!(!guard.can_accommodate_edit(&bridge, &bridge, &bookings, capacity(12)));
    for existing in &bookings {
        assert!(guard.can_accommodate_edit(existing, existing, &bookings, capacity(13)));
    }
}
