//! Contact Book - an interactive command-line address book.
//!
//! Contacts live in memory for the duration of one session. Each contact has
//! a name, any number of ten-digit phone numbers, and an optional birthday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: `Record` (one contact) and `AddressBook` (all of them)
//! - **commands**: Parsing input lines and running commands against the book
//! - **session**: The prompt loop over any reader/writer pair
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use commands::{Command, CommandContext, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::{AddressBook, Record};
pub use session::{Clock, FixedClock, Session, SystemClock};
