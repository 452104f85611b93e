//! The interactive command loop.
//!
//! `run` drives a read-parse-dispatch-print cycle over injected reader and
//! writer handles, so the whole conversation is testable without a
//! terminal. `execute` processes a single line; all command errors are
//! converted to their display text there and printed like any other reply,
//! so no user input can terminate the loop.

mod handlers;

use crate::book::AddressBook;
use crate::error::CommandError;
use crate::storage::SnapshotStore;
use std::io::{BufRead, Write};

/// Outcome of one executed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// A line to print before prompting again.
    Message(String),
    /// Leave the loop.
    Quit,
}

/// Split an input line into a lowercased command word and its arguments.
/// Blank lines carry no command.
fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args: Vec<&str> = parts.collect();
    Some((command, args))
}

/// Process one input line: parse, dispatch, and turn any command error
/// into its user-facing message. Blank input yields no reply.
pub fn execute(line: &str, book: &mut AddressBook) -> Option<Reply> {
    let (command, args) = parse_input(line)?;
    tracing::debug!("Dispatching command: {}", command);

    let result = match command.as_str() {
        "hello" => Ok(handlers::hello()),
        "add" => handlers::add_contact(&args, book),
        "change" => handlers::change_phone(&args, book),
        "phone" => handlers::show_phones(&args, book),
        "all" => Ok(handlers::list_all(book)),
        "add-birthday" => handlers::add_birthday(&args, book),
        "show-birthday" => handlers::show_birthday(&args, book),
        "birthdays" => Ok(handlers::upcoming_birthdays(book)),
        "close" | "exit" => return Some(Reply::Quit),
        _ => Err(CommandError::UnknownCommand),
    };

    let message = result.unwrap_or_else(|e| e.to_string());
    Some(Reply::Message(message))
}

/// Drive the conversation until `close`/`exit` or end of input, then
/// persist the book and say goodbye.
pub fn run<R, W>(
    input: R,
    output: &mut W,
    book: &mut AddressBook,
    store: &dyn SnapshotStore,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut lines = input.lines();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        // EOF closes the session the same way `exit` does, so the book
        // still gets saved.
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match execute(&line, book) {
            Some(Reply::Message(message)) => writeln!(output, "{}", message)?,
            Some(Reply::Quit) => break,
            None => {}
        }
    }

    store.save(book)?;
    writeln!(output, "Good bye!")?;
    Ok(())
}
