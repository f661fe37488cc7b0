//! Command parsing and dispatch.
//!
//! A line becomes a [`Command`], the command runs against the
//! [`AddressBook`], and the result becomes a [`Reply`]. [`execute`] is the
//! single place where command errors are turned into user-facing text.

pub mod handlers;
pub mod parser;

pub use handlers::Reply;
pub use parser::{parse_input, Command};

use crate::error::CommandResult;
use crate::models::AddressBook;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Values a command may need besides the book itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// The date `birthdays` counts from
    pub today: NaiveDate,
    /// How many days ahead `birthdays` looks
    pub birthday_window_days: i64,
}

/// Run a parsed command.
pub fn dispatch(
    book: &mut AddressBook,
    command: Command,
    ctx: &CommandContext,
) -> CommandResult<Reply> {
    debug!(command = command.word(), "Dispatching command");

    match command {
        Command::Hello => Ok(handlers::hello()),
        Command::Add { name, phone } => handlers::add(book, &name, &phone),
        Command::Change { name, phone } => handlers::change(book, &name, &phone),
        Command::Phone { name } => Ok(handlers::phone(book, &name)),
        Command::All => Ok(handlers::all(book)),
        Command::AddBirthday { name, birthday } => handlers::add_birthday(book, &name, &birthday),
        Command::ShowBirthday { name } => Ok(handlers::show_birthday(book, &name)),
        Command::Birthdays => Ok(handlers::birthdays(
            book,
            ctx.today,
            ctx.birthday_window_days,
        )),
        Command::Exit => Ok(Reply::farewell()),
    }
}

/// Parse and run one input line.
///
/// Returns `None` for a blank line. Any error is reported as a one-line
/// reply and the book is left as it was before the command.
pub fn execute(book: &mut AddressBook, line: &str, ctx: &CommandContext) -> Option<Reply> {
    let result = Command::parse(line).and_then(|command| match command {
        Some(command) => dispatch(book, command, ctx).map(Some),
        None => Ok(None),
    });

    match result {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = ?e, "Command rejected");
            Some(Reply::line(e.to_string()))
        }
    }
}
