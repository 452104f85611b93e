//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format for birthdays.
const FORMAT: &str = "%d.%m.%Y";

/// Shape gate applied before calendar validation. Chrono alone would accept
/// unpadded inputs like "1.1.2000".
static FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday pattern"));

/// A type-safe wrapper for birthdays.
///
/// This ensures that birthdays are validated at construction time. The
/// input must be a real calendar date written as `DD.MM.YYYY` — two-digit
/// day, two-digit month, four-digit year, dot-separated.
///
/// # Example
///
/// ```
/// use cardfile::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string does not match
    /// `DD.MM.YYYY` or names a date that does not exist (e.g. "31.02.2024").
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !FORMAT_RE.is_match(raw) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Render a date in the birthday format for console output, e.g. for
/// congratulation dates that are not themselves `Birthday` values.
pub fn format_date(date: NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}
