//! The address book: an insertion-ordered collection of contacts and the
//! upcoming-birthday query.

use crate::domain::Birthday;
use crate::error::{BookError, BookResult};
use crate::models::{BirthdayReminder, Contact};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Length of the upcoming-birthday window in days, inclusive on both ends.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A mapping from contact name to contact, iterated in insertion order.
///
/// Backed by a vector with name-position lookup: the book holds at most
/// one entry per name, iteration follows insertion order, and the
/// persisted snapshot reproduces that order.
///
/// `add` with an existing name replaces the whole record at its current
/// position (last write wins). Callers that want to keep the old record's
/// phones must fetch it with [`AddressBook::find_mut`] and mutate it
/// instead.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Insert a contact, or overwrite the record stored under the same
    /// name at its existing position.
    pub fn add(&mut self, contact: Contact) {
        match self.position(contact.name()) {
            Some(index) => self.contacts[index] = contact,
            None => self.contacts.push(contact),
        }
    }

    /// Look up a contact by name. A miss is not an error.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.position(name).map(|index| &self.contacts[index])
    }

    /// Look up a contact by name for in-place editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.position(name).map(|index| &mut self.contacts[index])
    }

    /// Remove the contact stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no such contact exists.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.contacts.remove(index);
        Ok(())
    }

    /// Iterate over the contacts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Contacts whose next birthday occurrence falls within the window
    /// `[today, today + 7]`, inclusive on both ends.
    ///
    /// Each entry carries the congratulation date: the occurrence itself,
    /// or the following Monday when the occurrence lands on a weekend.
    /// The window check applies to the unshifted occurrence, so a shifted
    /// congratulation date may fall up to two days past the window.
    /// Output follows the book's insertion order, not date order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<BirthdayReminder> {
        self.contacts
            .iter()
            .filter_map(|contact| {
                let birthday = contact.birthday()?;
                let occurrence = next_occurrence(birthday, today);
                let days_until = (occurrence - today).num_days();
                if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
                    return None;
                }
                Some(BirthdayReminder {
                    name: contact.name().to_string(),
                    congratulation_date: congratulation_date(occurrence),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name() == name)
    }
}

/// This year's occurrence of the birthday, rolled over to next year when
/// it has already passed.
///
/// The comparison is strictly `<`: a birthday occurring exactly today
/// stays in this year. That asymmetry is a behavioral contract, not an
/// oversight.
fn next_occurrence(birthday: Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in(today.year(), birthday);
    if this_year < today {
        occurrence_in(today.year() + 1, birthday)
    } else {
        this_year
    }
}

/// The birthday's occurrence in `year`.
///
/// The only month/day pair from a valid birthday that can fail to exist
/// is Feb 29 in a non-leap year; it falls back to Feb 28 of that year.
fn occurrence_in(year: i32, birthday: Birthday) -> NaiveDate {
    let date = birthday.date();
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
    })
}

/// Shift a weekend occurrence forward to the following Monday.
fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(name: &str, phone: &str) -> Contact {
        let mut contact = Contact::new(name);
        contact.add_phone(phone).unwrap();
        contact
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add(contact("John", "1111111111"));

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().name(), "John");
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_overwrites_whole_record_in_place() {
        let mut book = AddressBook::new();
        book.add(contact("John", "1111111111"));
        book.add(contact("Jane", "2222222222"));

        // Re-adding John replaces his record but keeps his slot.
        book.add(contact("John", "3333333333"));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.iter().map(Contact::name).collect();
        assert_eq!(names, vec!["John", "Jane"]);

        let phones: Vec<&str> = book
            .find("John")
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(phones, vec!["3333333333"]);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add(contact("John", "1111111111"));

        book.find_mut("John")
            .unwrap()
            .edit_phone("1111111111", "2222222222")
            .unwrap();

        assert_eq!(
            book.find("John").unwrap().phones()[0].as_str(),
            "2222222222"
        );
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add(contact("John", "1111111111"));

        book.delete("John").unwrap();
        assert!(book.is_empty());

        assert!(matches!(
            book.delete("John"),
            Err(BookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["Carol", "Alice", "Bob"] {
            book.add(contact(name, "1234567890"));
        }

        let names: Vec<&str> = book.iter().map(Contact::name).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_next_occurrence_upcoming_this_year() {
        let birthday = Birthday::new("15.06.2020").unwrap();
        let today = date(2024, 6, 10);
        assert_eq!(next_occurrence(birthday, today), date(2024, 6, 15));
    }

    #[test]
    fn test_next_occurrence_rolls_past_dates_to_next_year() {
        let birthday = Birthday::new("01.06.2020").unwrap();
        let today = date(2024, 6, 10);
        assert_eq!(next_occurrence(birthday, today), date(2025, 6, 1));
    }

    #[test]
    fn test_next_occurrence_today_is_not_rolled() {
        let birthday = Birthday::new("10.06.2020").unwrap();
        let today = date(2024, 6, 10);
        assert_eq!(next_occurrence(birthday, today), date(2024, 6, 10));
    }

    #[test]
    fn test_occurrence_in_leap_day_falls_back() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(occurrence_in(2023, birthday), date(2023, 2, 28));
        assert_eq!(occurrence_in(2024, birthday), date(2024, 2, 29));
    }

    #[test]
    fn test_congratulation_date_shifts_weekends() {
        // 2024-06-15 is a Saturday, 2024-06-16 a Sunday.
        assert_eq!(congratulation_date(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 17)), date(2024, 6, 17));
    }

    #[test]
    fn test_upcoming_birthdays_skips_contacts_without_birthday() {
        let mut book = AddressBook::new();
        book.add(contact("John", "1111111111"));

        assert!(book.upcoming_birthdays(date(2024, 6, 10)).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_window_bounds() {
        let mut book = AddressBook::new();

        let mut on_edge = Contact::new("Edge");
        on_edge.set_birthday("17.06.1990").unwrap();
        book.add(on_edge);

        let mut past_edge = Contact::new("PastEdge");
        past_edge.set_birthday("18.06.1990").unwrap();
        book.add(past_edge);

        // Window from Monday 2024-06-10 runs through 2024-06-17 inclusive.
        let reminders = book.upcoming_birthdays(date(2024, 6, 10));
        let names: Vec<&str> = reminders.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Edge"]);
    }
}
