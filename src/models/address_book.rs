//! The in-memory collection of contacts for one session.

use super::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days ahead covered by [`AddressBook::upcoming_birthdays`].
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// All records of a session, in insertion order.
///
/// Lookups are linear scans by exact name. The book does not reject
/// duplicate names; callers check with [`AddressBook::get_contact`] before
/// inserting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressBook {
    contacts: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn add_contact(&mut self, record: Record) {
        self.contacts.push(record);
    }

    /// First record whose name equals `name` exactly (case-sensitive).
    pub fn get_contact(&self, name: &str) -> Option<&Record> {
        self.contacts.iter().find(|r| r.name().as_str() == name)
    }

    /// Mutable variant of [`AddressBook::get_contact`].
    pub fn get_contact_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.contacts.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn contacts(&self) -> &[Record] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Records whose birthday falls 1 to 7 days after `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<&Record> {
        self.upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// Records whose birthday `b` satisfies `0 < b - today <= days`, in
    /// collection order.
    ///
    /// The stored date is compared literally, year included: a birthday
    /// recorded as `10.05.1990` is never upcoming in 2026.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: i64) -> Vec<&Record> {
        self.contacts
            .iter()
            .filter(|record| {
                record.birthday().is_some_and(|birthday| {
                    let ahead = birthday.date().signed_duration_since(today).num_days();
                    ahead > 0 && ahead <= days
                })
            })
            .collect()
    }
}
