//! cardfile - a console-driven personal address book.
//!
//! Stores contacts with validated phone numbers and birthdays, answers
//! lookup commands over an interactive loop, and reports which birthdays
//! fall within the next week, shifting weekend dates to the following
//! Monday. The whole book persists as one binary snapshot between
//! sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays)
//! - **models**: Contact records and birthday reminders
//! - **book**: The address book collection and the birthday-window query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **storage**: Snapshot persistence port and its file implementation
//! - **repl**: The interactive command loop and per-command handlers

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{BirthdayReminder, Contact};
pub use storage::{FileSnapshotStore, SnapshotStore};
