use restobook_core::{Booking, BookingTime, FieldError, Member, Staff};

#[test]
fn member_deserialization_validates_fields() {
    let ok: Member = serde_json::from_str(
        r#"{ "name": "Alice", "phone": "123", "email": "alice@example.com", "loyalty_points": 7 }"#,
    )
    .expect("valid member");
    assert_eq!(ok.name.as_str(), "Alice");
    assert_eq!(ok.loyalty_points.value(), 7);

    let bad_phone = serde_json::from_str::<Member>(
        r#"{ "name": "Alice", "phone": "12", "email": "alice@example.com" }"#,
    );
    assert!(bad_phone.is_err());
}

#[test]
fn staff_rating_is_bounded_on_load() {
    let result = serde_json::from_str::<Staff>(
        r#"{ "name": "Bob", "phone": "555", "email": "bob@example.com", "address": "1 Main St", "rating": 6 }"#,
    );
    assert!(result.is_err());
}

#[test]
fn booking_time_uses_minute_format() {
    let booking: Booking = serde_json::from_str(
        r#"{
            "customer": { "name": "Alice", "phone": "123", "email": "alice@example.com" },
            "start": "2024-03-01 14:30",
            "size": 5
        }"#,
    )
    .expect("valid booking");
    assert_eq!(booking.start.to_string(), "2024-03-01 14:30");
    assert_eq!(booking.duration_minutes, 0);
    assert!(booking.window().is_point());

    let json = serde_json::to_value(&booking).expect("serialize");
    assert_eq!(json["start"], "2024-03-01 14:30");
    assert_eq!(json["size"], 5);
}

#[test]
fn booking_time_rejects_other_formats() {
    assert_eq!(
        BookingTime::parse("2024/03/01 14:30"),
        Err(FieldError::InvalidDateTime("2024/03/01 14:30".to_string()))
    );
    assert!(serde_json::from_str::<Booking>(
        r#"{
            "customer": { "name": "Alice", "phone": "123", "email": "alice@example.com" },
            "start": "2024-03-01T14:30:00",
            "size": 5
        }"#,
    )
    .is_err());
}

#[test]
fn zero_sized_booking_is_rejected() {
    let result = serde_json::from_str::<Booking>(
        r#"{
            "customer": { "name": "Alice", "phone": "123", "email": "alice@example.com" },
            "start": "2024-03-01 14:30",
            "size": 0
        }"#,
    );
    assert!(result.is_err());
}
