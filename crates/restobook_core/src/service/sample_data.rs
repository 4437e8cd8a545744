//! Seed book used when no data file exists yet.

use crate::model::booking::Booking;
use crate::model::entity::Record;
use crate::model::fields::{
    Address, BookingSize, BookingTime, Capacity, Email, LoyaltyPoints, Name, Phone, Quantity,
    Rating, Unit,
};
use crate::model::ingredient::Ingredient;
use crate::model::member::Member;
use crate::model::staff::Staff;
use crate::service::restaurant_model::ModelResult;
use crate::store::snapshot::Snapshot;

/// Builds the sample restaurant book.
pub fn sample_book() -> ModelResult<Snapshot> {
    let alice = member("Alice Pauline", "94351253", "alice@example.com", 120)?;
    let benson = member("Benson Meier", "98765432", "johnd@example.com", 40)?;
    let carl = member("Carl Kurz", "95352563", "heinz@example.com", 0)?;

    let records: Vec<Record> = vec![
        alice.clone().into(),
        benson.clone().into(),
        carl.into(),
        staff("Daniel Meier", "87652533", "cornelia@example.com", "10th street", 4)?.into(),
        staff("Elle Meyer", "94822241", "werner@example.com", "michegan ave", 5)?.into(),
        ingredient("Chicken Breast", 25, "kg")?.into(),
        ingredient("Basmati Rice", 40, "kg")?.into(),
        ingredient("Lime", 120, "pcs")?.into(),
        booking(alice, "2024-03-01 18:30", 120, 4)?.into(),
        booking(benson, "2024-03-01 19:00", 90, 2)?.into(),
    ];

    let mut book = Snapshot::with_capacity(Capacity::new(Capacity::DEFAULT)?);
    for record in records {
        book.add_record(record)?;
    }
    Ok(book)
}

fn member(name: &str, phone: &str, email: &str, points: u32) -> ModelResult<Member> {
    Ok(Member::new(Name::parse(name)?, Phone::parse(phone)?, Email::parse(email)?)
        .with_points(LoyaltyPoints::new(points)?))
}

fn staff(name: &str, phone: &str, email: &str, address: &str, rating: u32) -> ModelResult<Staff> {
    Ok(Staff::new(
        Name::parse(name)?,
        Phone::parse(phone)?,
        Email::parse(email)?,
        Address::parse(address)?,
        Rating::new(rating)?,
    ))
}

fn ingredient(name: &str, quantity: u32, unit: &str) -> ModelResult<Ingredient> {
    Ok(Ingredient::new(
        Name::parse(name)?,
        Quantity::new(quantity)?,
        Unit::parse(unit)?,
    ))
}

fn booking(customer: Member, start: &str, minutes: u32, size: u32) -> ModelResult<Booking> {
    Ok(Booking::new(
        customer,
        BookingTime::parse(start)?,
        minutes,
        BookingSize::new(size)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::sample_book;
    use crate::model::entity::EntityKind;

    #[test]
    fn sample_book_is_valid_and_populated() {
        let book = sample_book().expect("sample data should be valid");
        assert_eq!(book.len_of(EntityKind::Member), 3);
        assert_eq!(book.len_of(EntityKind::Staff), 2);
        assert_eq!(book.len_of(EntityKind::Ingredient), 3);
        assert_eq!(book.len_of(EntityKind::Booking), 2);
    }
}
