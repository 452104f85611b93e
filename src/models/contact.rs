//! Contact model representing one person's card in the address book.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single person in the address book.
///
/// The name is the record's unique key and is immutable after creation.
/// Phones keep insertion order and may repeat — the record enforces no
/// uniqueness on them. All mutation goes through the edit operations so
/// that only validated values ever reach the fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a new contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name, the unique key within an address book.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Duplicates are permitted; no dedup check is made.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `raw` is not exactly 10 digits.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone matching `value`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<()> {
        let index = self.position(value)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone matching `old` with the validated `new`,
    /// keeping its position in the list.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches `old`; the
    /// lookup happens before `new` is validated, so an absent `old` wins
    /// over an invalid `new`. Either failure leaves the list unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position(old)?;
        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Find the first phone matching `value`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn find_phone(&self, value: &str) -> BookResult<&PhoneNumber> {
        let index = self.position(value)?;
        Ok(&self.phones[index])
    }

    /// Parse `raw` as `DD.MM.YYYY` and store it as the birthday,
    /// replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `raw` is malformed or names an
    /// impossible calendar date.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    fn position(&self, value: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == value)
            .ok_or_else(|| BookError::PhoneNotFound(value.to_string()))
    }

    fn joined_phones(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.joined_phones(),
            match self.birthday {
                Some(birthday) => birthday.to_string(),
                None => "-".to_string(),
            }
        )
    }
}
