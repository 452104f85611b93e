//! Per-command handlers behind the interactive loop.
//!
//! Every handler returns the user-facing reply line or a `CommandError`;
//! the dispatch boundary in `repl` turns errors into their display text.

use crate::book::AddressBook;
use crate::domain::PhoneNumber;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::Contact;
use chrono::Local;

const ADD_USAGE: &str = "add <name> <phone>";
const CHANGE_USAGE: &str = "change <name> <old_phone> <new_phone>";
const PHONE_USAGE: &str = "phone <name>";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

/// Split out exactly `N` arguments, or fail with the command's usage line.
/// Extra arguments are as wrong as missing ones.
fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> CommandResult<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| CommandError::BadArguments { usage })
}

fn find_contact<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Contact> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}

fn find_contact_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> CommandResult<&'a mut Contact> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}

pub(super) fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create the contact, or append another phone to
/// an existing one. The phone is validated before the book is touched,
/// so a bad phone never leaves behind an empty contact.
pub(super) fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args(args, ADD_USAGE)?;
    match book.find_mut(name) {
        Some(contact) => {
            contact.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut contact = Contact::new(name);
            contact.add_phone(phone)?;
            book.add(contact);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <old_phone> <new_phone>`: replace one phone in place.
pub(super) fn change_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = expect_args(args, CHANGE_USAGE)?;
    let contact = find_contact_mut(book, name)?;
    contact.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: list the contact's phone numbers.
pub(super) fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args(args, PHONE_USAGE)?;
    let contact = find_contact(book, name)?;
    let phones = contact
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "These are the phone numbers for {}: {}",
        name, phones
    ))
}

/// `all`: every record on its own line, in insertion order.
pub(super) fn list_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "The address book is empty.".to_string();
    }
    book.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: set the contact's birthday.
pub(super) fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = expect_args(args, ADD_BIRTHDAY_USAGE)?;
    let contact = find_contact_mut(book, name)?;
    contact.set_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: print the stored birthday, or a notice when
/// the contact has none.
pub(super) fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args(args, SHOW_BIRTHDAY_USAGE)?;
    let contact = find_contact(book, name)?;
    Ok(match contact.birthday() {
        Some(birthday) => format!("{}'s birthday is {}", name, birthday),
        None => format!("{} has no birthday set.", name),
    })
}

/// `birthdays`: the upcoming-birthday report for the next seven days.
pub(super) fn upcoming_birthdays(book: &AddressBook) -> String {
    let reminders = book.upcoming_birthdays(Local::now().date_naive());
    if reminders.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    reminders
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
