//! Birthday reminder emitted by the upcoming-birthday query.

use crate::domain::format_date;
use chrono::NaiveDate;
use std::fmt;

/// One entry of the upcoming-birthday report: who to congratulate and on
/// which day.
///
/// The congratulation date is the birthday occurrence already shifted past
/// a weekend where needed, so consumers can print it as-is. These entries
/// are console output only and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReminder {
    /// Name of the contact whose birthday is coming up
    pub name: String,

    /// The day to congratulate them on, weekend-adjusted
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for BirthdayReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Congratulation Date: {}",
            self.name,
            format_date(self.congratulation_date)
        )
    }
}
