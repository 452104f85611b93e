//! Data models for the address book.
//!
//! This module contains the record type stored in the book and the
//! reminder entries produced by the birthday-window query.

pub mod contact;
pub mod reminder;

pub use contact::Contact;
pub use reminder::BirthdayReminder;
