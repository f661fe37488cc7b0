//! Command handlers.
//!
//! Each handler takes the address book and already-parsed arguments and
//! returns the lines to show the user. Validation failures come back as
//! `Err` and are turned into a message by [`super::execute`].

use crate::error::CommandResult;
use crate::models::{AddressBook, Record, UPCOMING_WINDOW_DAYS};
use chrono::NaiveDate;
use tracing::info;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const NOT_FOUND: &str = "Contact not found.";

/// What the session should print after a command, and whether to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub exit: bool,
}

impl Reply {
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            exit: false,
        }
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self { lines, exit: false }
    }

    pub fn farewell() -> Self {
        Self {
            lines: vec![FAREWELL.to_string()],
            exit: true,
        }
    }
}

pub fn hello() -> Reply {
    Reply::line(GREETING)
}

/// Create a contact with one phone.
///
/// The record is only inserted once both the name and the phone are valid,
/// so a rejected phone never leaves a half-built contact behind.
pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<Reply> {
    if book.get_contact(name).is_some() {
        return Ok(Reply::line("Contact already exists."));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_contact(record);

    info!(name, "Contact added");
    Ok(Reply::line("Contact added successfully."))
}

/// Replace all of a contact's phones with `phone`.
pub fn change(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<Reply> {
    let Some(record) = book.get_contact_mut(name) else {
        return Ok(Reply::line(NOT_FOUND));
    };

    record.replace_phones(phone)?;

    info!(name, "Phone number updated");
    Ok(Reply::line("Phone number updated successfully."))
}

pub fn phone(book: &AddressBook, name: &str) -> Reply {
    match book.get_contact(name) {
        Some(record) => {
            let mut lines = vec!["Phone numbers:".to_string()];
            lines.extend(record.phones().iter().map(|p| p.to_string()));
            Reply::lines(lines)
        }
        None => Reply::line(NOT_FOUND),
    }
}

pub fn all(book: &AddressBook) -> Reply {
    if book.is_empty() {
        return Reply::line("No contacts.");
    }

    let mut lines = vec!["All contacts:".to_string()];
    lines.extend(book.contacts().iter().map(|r| r.name().to_string()));
    Reply::lines(lines)
}

pub fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<Reply> {
    let Some(record) = book.get_contact_mut(name) else {
        return Ok(Reply::line(NOT_FOUND));
    };

    record.add_birthday(birthday)?;

    info!(name, "Birthday set");
    Ok(Reply::line("Birthday added successfully."))
}

pub fn show_birthday(book: &AddressBook, name: &str) -> Reply {
    match book.get_contact(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => Reply::line(format!("{}'s birthday: {}", record.name(), birthday)),
            None => Reply::line(format!("{} has no birthday set.", record.name())),
        },
        None => Reply::line(NOT_FOUND),
    }
}

/// List contacts whose birthday is within `window_days` after `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> Reply {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return Reply::line("No upcoming birthdays.");
    }

    let header = if window_days == UPCOMING_WINDOW_DAYS {
        "Upcoming birthdays for the next week:".to_string()
    } else {
        format!("Upcoming birthdays for the next {} days:", window_days)
    };
    let mut lines = vec![header];
    lines.extend(upcoming.into_iter().filter_map(|record| {
        record
            .birthday()
            .map(|birthday| format!("{}: {}", record.name(), birthday))
    }));
    Reply::lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::error::CommandError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_add_then_duplicate() {
        let mut book = AddressBook::new();
        assert_eq!(
            add(&mut book, "Alice", "1234567890").unwrap(),
            Reply::line("Contact added successfully.")
        );
        assert_eq!(
            add(&mut book, "Alice", "0987654321").unwrap(),
            Reply::line("Contact already exists.")
        );
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.get_contact("Alice").unwrap().phones()[0].as_str(),
            "1234567890"
        );
    }

    #[test]
    fn test_add_with_bad_phone_registers_nothing() {
        let mut book = AddressBook::new();
        let err = add(&mut book, "Bob", "123").unwrap_err();
        assert_eq!(
            err,
            CommandError::Validation(ValidationError::InvalidPhone("123".to_string()))
        );
        assert!(book.get_contact("Bob").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_replaces_all_phones() {
        let mut book = AddressBook::new();
        add(&mut book, "Alice", "1111111111").unwrap();
        book.get_contact_mut("Alice")
            .unwrap()
            .add_phone("2222222222")
            .unwrap();

        assert_eq!(
            change(&mut book, "Alice", "3333333333").unwrap(),
            Reply::line("Phone number updated successfully.")
        );
        assert_eq!(
            phone(&book, "Alice").lines,
            vec!["Phone numbers:", "3333333333"]
        );
    }

    #[test]
    fn test_change_invalid_phone_keeps_old() {
        let mut book = AddressBook::new();
        add(&mut book, "Alice", "1111111111").unwrap();

        assert!(change(&mut book, "Alice", "nope").is_err());
        assert_eq!(
            phone(&book, "Alice").lines,
            vec!["Phone numbers:", "1111111111"]
        );
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            change(&mut book, "Ghost", "1234567890").unwrap(),
            Reply::line(NOT_FOUND)
        );
    }

    #[test]
    fn test_phone_unknown_contact() {
        let book = AddressBook::new();
        assert_eq!(phone(&book, "Ghost"), Reply::line(NOT_FOUND));
    }

    #[test]
    fn test_all() {
        let mut book = AddressBook::new();
        assert_eq!(all(&book), Reply::line("No contacts."));

        add(&mut book, "Alice", "1111111111").unwrap();
        add(&mut book, "Bob", "2222222222").unwrap();
        assert_eq!(all(&book).lines, vec!["All contacts:", "Alice", "Bob"]);
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        add(&mut book, "Alice", "1111111111").unwrap();

        assert_eq!(
            show_birthday(&book, "Alice"),
            Reply::line("Alice has no birthday set.")
        );
        assert_eq!(
            add_birthday(&mut book, "Alice", "01.01.2020").unwrap(),
            Reply::line("Birthday added successfully.")
        );
        assert_eq!(
            show_birthday(&book, "Alice"),
            Reply::line("Alice's birthday: 01.01.2020")
        );
        assert_eq!(show_birthday(&book, "Ghost"), Reply::line(NOT_FOUND));
        assert_eq!(
            add_birthday(&mut book, "Ghost", "01.01.2020").unwrap(),
            Reply::line(NOT_FOUND)
        );
    }

    #[test]
    fn test_add_birthday_invalid_date() {
        let mut book = AddressBook::new();
        add(&mut book, "Alice", "1111111111").unwrap();

        let err = add_birthday(&mut book, "Alice", "2020-01-01").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
        assert!(book.get_contact("Alice").unwrap().birthday().is_none());
    }

    #[test]
    fn test_birthdays() {
        let mut book = AddressBook::new();
        assert_eq!(
            birthdays(&book, today(), 7),
            Reply::line("No upcoming birthdays.")
        );

        add(&mut book, "Alice", "1111111111").unwrap();
        add(&mut book, "Bob", "2222222222").unwrap();
        add_birthday(&mut book, "Alice", "04.06.2024").unwrap();
        add_birthday(&mut book, "Bob", "20.06.2024").unwrap();

        assert_eq!(
            birthdays(&book, today(), 7).lines,
            vec!["Upcoming birthdays for the next week:", "Alice: 04.06.2024"]
        );
    }

    #[test]
    fn test_birthdays_header_names_custom_window() {
        let mut book = AddressBook::new();
        add(&mut book, "Alice", "1111111111").unwrap();
        add_birthday(&mut book, "Alice", "20.06.2024").unwrap();

        assert_eq!(
            birthdays(&book, today(), 30).lines,
            vec!["Upcoming birthdays for the next 30 days:", "Alice: 20.06.2024"]
        );
    }

    #[test]
    fn test_farewell_exits() {
        let reply = Reply::farewell();
        assert!(reply.exit);
        assert_eq!(reply.lines, vec![FAREWELL]);
        assert!(!hello().exit);
    }
}
