//! Data models for the address book.
//!
//! A `Record` is one contact; the `AddressBook` holds every record of the
//! session.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UPCOMING_WINDOW_DAYS};
pub use record::Record;
