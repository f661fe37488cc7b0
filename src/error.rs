//! Error types for the address book.
//!
//! Domain validation lives in [`crate::domain::ValidationError`]; this module
//! holds the errors raised around it by command handling and configuration.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command can end with. None of them stop the session: the
/// dispatcher prints the message and waits for the next line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wrong number of arguments for the command
    #[error("Invalid number of arguments.")]
    InvalidArguments {
        command: String,
        expected: usize,
        actual: usize,
    },

    /// The first word is not a known command
    #[error("Invalid command.")]
    UnknownCommand(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
