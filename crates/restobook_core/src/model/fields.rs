//! Validated field value objects shared by restaurant records.
//!
//! # Responsibility
//! - Turn raw text/numbers into typed, validated field values.
//! - Keep the serialized shape flat (plain strings and integers).
//!
//! # Invariants
//! - A constructed value object always satisfies its validation rule.
//! - Deserialization runs the same validation as `FromStr`, so invalid
//!   persisted data is rejected instead of masked.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Input/output format for booking start times.
pub const BOOKING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+( [A-Za-z0-9]+)*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9+_.\-]*[A-Za-z0-9])?@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9]$",
    )
    .expect("valid email regex")
});
static UNIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{1,10}$").expect("valid unit regex"));

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidAddress,
    InvalidRating(String),
    InvalidUnit(String),
    InvalidNumber { field: &'static str, value: String },
    CapacityOutOfRange(u32),
    BookingSizeOutOfRange(u32),
    InvalidDateTime(String),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names contain alphanumeric words separated by single spaces"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "invalid phone `{value}`: phone numbers contain only digits and are at least 3 digits long"
            ),
            Self::InvalidEmail(value) => write!(f, "invalid email `{value}`"),
            Self::InvalidAddress => write!(f, "address must not be blank"),
            Self::InvalidRating(value) => {
                write!(f, "invalid rating `{value}`: expected an integer from {} to {}", Rating::MIN, Rating::MAX)
            }
            Self::InvalidUnit(value) => {
                write!(f, "invalid unit `{value}`: expected 1 to 10 letters")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "invalid {field} `{value}`: expected a non-negative integer")
            }
            Self::CapacityOutOfRange(value) => write!(
                f,
                "capacity {value} out of range: expected {} to {}",
                Capacity::MIN,
                Capacity::MAX
            ),
            Self::BookingSizeOutOfRange(value) => write!(
                f,
                "booking size {value} out of range: expected {} to {}",
                BookingSize::MIN,
                BookingSize::MAX
            ),
            Self::InvalidDateTime(value) => {
                write!(f, "invalid booking time `{value}`: expected yyyy-MM-dd HH:mm")
            }
        }
    }
}

impl Error for FieldError {}

/// Generates the conversion/formatting boilerplate for text-backed fields.
///
/// The type must provide `fn parse(&str) -> Result<Self, FieldError>`.
macro_rules! text_field {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $ty {
            type Err = FieldError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Generates the conversion/formatting boilerplate for integer-backed fields.
///
/// The type must provide `fn new(u32) -> Result<Self, FieldError>`.
macro_rules! number_field {
    ($ty:ident, $label:literal) => {
        impl $ty {
            pub fn value(self) -> u32 {
                u32::from(self.0)
            }
        }

        impl FromStr for $ty {
            type Err = FieldError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                let parsed = trimmed
                    .parse::<u32>()
                    .map_err(|_| FieldError::InvalidNumber {
                        field: $label,
                        value: trimmed.to_string(),
                    })?;
                Self::new(parsed)
            }
        }

        impl TryFrom<u32> for $ty {
            type Error = FieldError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for u32 {
            fn from(value: $ty) -> Self {
                value.value()
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Person or ingredient name: alphanumeric words separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        if !NAME_RE.is_match(trimmed) {
            return Err(FieldError::InvalidName(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Case-insensitive comparison, used where identity ignores casing.
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

text_field!(Name);

/// Digits-only phone number, at least 3 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        if !PHONE_RE.is_match(trimmed) {
            return Err(FieldError::InvalidPhone(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_field!(Phone);

/// `local@domain` address; the last domain label is at least 2 chars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(FieldError::InvalidEmail(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_field!(Email);

/// Free-form postal address; must not be blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(FieldError::InvalidAddress);
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_field!(Address);

/// Stock unit such as `kg` or `pcs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Unit(String);

impl Unit {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        if !UNIT_RE.is_match(trimmed) {
            return Err(FieldError::InvalidUnit(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_field!(Unit);

/// Member loyalty points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LoyaltyPoints(u32);

impl LoyaltyPoints {
    pub fn new(value: u32) -> Result<Self, FieldError> {
        Ok(Self(value))
    }

    /// Adds points, saturating at `u32::MAX`.
    pub fn saturating_add(self, points: u32) -> Self {
        Self(self.0.saturating_add(points))
    }
}

number_field!(LoyaltyPoints, "loyalty points");

/// Staff performance rating in `0..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 5;

    pub fn new(value: u32) -> Result<Self, FieldError> {
        if value > Self::MAX {
            return Err(FieldError::InvalidRating(value.to_string()));
        }
        // Bounded by MAX above.
        Ok(Self(value as u8))
    }
}

number_field!(Rating, "rating");

/// Stock quantity of an ingredient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self, FieldError> {
        Ok(Self(value))
    }

    pub fn checked_add(self, amount: u32) -> Option<Self> {
        self.0.checked_add(amount).map(Self)
    }

    pub fn checked_sub(self, amount: u32) -> Option<Self> {
        self.0.checked_sub(amount).map(Self)
    }
}

number_field!(Quantity, "quantity");

/// Total concurrent guest capacity of the restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capacity(u32);

impl Capacity {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10_000;
    pub const DEFAULT: u32 = 50;

    pub fn new(value: u32) -> Result<Self, FieldError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(FieldError::CapacityOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

number_field!(Capacity, "capacity");

/// Guest count of one booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BookingSize(u32);

impl BookingSize {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = Capacity::MAX;

    pub fn new(value: u32) -> Result<Self, FieldError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(FieldError::BookingSizeOutOfRange(value));
        }
        Ok(Self(value))
    }
}

number_field!(BookingSize, "booking size");

/// Minute-precision booking start time (`yyyy-MM-dd HH:mm`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingTime(NaiveDateTime);

impl BookingTime {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        NaiveDateTime::parse_from_str(trimmed, BOOKING_TIME_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::InvalidDateTime(trimmed.to_string()))
    }

    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub fn value(self) -> NaiveDateTime {
        self.0
    }

    pub fn date(self) -> NaiveDate {
        self.0.date()
    }

    /// Instant `minutes` after this time, clamped to the calendar maximum.
    pub fn plus_minutes(self, minutes: u32) -> NaiveDateTime {
        self.0
            .checked_add_signed(Duration::minutes(i64::from(minutes)))
            .unwrap_or(NaiveDateTime::MAX)
    }
}

impl FromStr for BookingTime {
    type Err = FieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for BookingTime {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BookingTime> for String {
    fn from(value: BookingTime) -> Self {
        value.to_string()
    }
}

impl Display for BookingTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(BOOKING_TIME_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_trims_and_rejects_symbols() {
        assert_eq!(Name::parse("  Alice Tan ").unwrap().as_str(), "Alice Tan");
        assert!(Name::parse("Alice  Tan").is_err());
        assert!(Name::parse("R2-D2").is_err());
        assert!(Name::parse("").is_err());
    }

    #[test]
    fn email_requires_two_char_top_label() {
        assert!(Email::parse("alice@example.com").is_ok());
        assert!(Email::parse("a.b+c@mail-server.co").is_ok());
        assert!(Email::parse("alice@x").is_err());
        assert!(Email::parse(".alice@example.com").is_err());
        assert!(Email::parse("alice.example.com").is_err());
    }

    #[test]
    fn rating_is_bounded() {
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert_eq!(
            Rating::new(6).unwrap_err(),
            FieldError::InvalidRating("6".to_string())
        );
    }

    #[test]
    fn number_parse_reports_field() {
        let err = "abc".parse::<Quantity>().unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidNumber {
                field: "quantity",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn booking_time_formats_round_trip() {
        let time = BookingTime::parse("2024-03-01 14:30").unwrap();
        assert_eq!(time.to_string(), "2024-03-01 14:30");
        assert_eq!(
            time.plus_minutes(90).format(BOOKING_TIME_FORMAT).to_string(),
            "2024-03-01 16:00"
        );
    }
}
