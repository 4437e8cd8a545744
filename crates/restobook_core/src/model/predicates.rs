//! Keyword and date predicates used to filter record views.

use crate::model::booking::Booking;
use crate::model::fields::Name;
use crate::model::ingredient::Ingredient;
use crate::model::member::Member;
use crate::model::staff::Staff;
use chrono::NaiveDate;

/// Records that expose a display name for keyword search.
pub trait Named {
    fn display_name(&self) -> &Name;
}

impl Named for Member {
    fn display_name(&self) -> &Name {
        &self.name
    }
}

impl Named for Staff {
    fn display_name(&self) -> &Name {
        &self.name
    }
}

impl Named for Ingredient {
    fn display_name(&self) -> &Name {
        &self.name
    }
}

/// Bookings are searched by their customer's name.
impl Named for Booking {
    fn display_name(&self) -> &Name {
        &self.customer.name
    }
}

/// Matches records whose name contains any keyword as a whole word,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    /// Blank keywords are dropped; an empty keyword set matches nothing.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn matches<T: Named>(&self, item: &T) -> bool {
        let name = item.display_name().as_str().to_lowercase();
        name.split(' ')
            .any(|word| self.keywords.iter().any(|keyword| keyword == word))
    }

    /// Boxed form accepted by `FilteredView::set_predicate`.
    pub fn into_predicate<T: Named + 'static>(self) -> Box<dyn Fn(&T) -> bool> {
        Box::new(move |item| self.matches(item))
    }
}

/// Matches bookings starting on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingOnDate(pub NaiveDate);

impl BookingOnDate {
    pub fn matches(&self, booking: &Booking) -> bool {
        booking.start.date() == self.0
    }

    pub fn into_predicate(self) -> Box<dyn Fn(&Booking) -> bool> {
        Box::new(move |booking| self.matches(booking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::{Email, Phone};

    fn member(name: &str) -> Member {
        Member::new(
            Name::parse(name).unwrap(),
            Phone::parse("91234567").unwrap(),
            Email::parse("someone@example.com").unwrap(),
        )
    }

    #[test]
    fn keywords_match_whole_words_case_insensitively() {
        let predicate = NameContainsKeywords::new(["alice", " TAN "]);
        assert!(predicate.matches(&member("Alice Lim")));
        assert!(predicate.matches(&member("Bob Tan")));
        assert!(!predicate.matches(&member("Alicia Wong")));
    }

    #[test]
    fn empty_keywords_match_nothing() {
        let predicate = NameContainsKeywords::new(["  "]);
        assert!(!predicate.matches(&member("Alice")));
    }
}
