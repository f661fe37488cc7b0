//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` text is what the user sees at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 decimal digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Phone number must be 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
