//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` pattern used for both parsing and display.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts "1.2.2030" and "+2030", so the shape is fixed first.
static BIRTHDAY_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date entered as `DD.MM.YYYY`.
///
/// The year is kept as typed; it is not normalised to the next occurrence.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("01.02.2030").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2030, 2, 1).unwrap());
/// assert_eq!(birthday.to_string(), "01.02.2030");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text has the wrong
    /// shape or names an impossible date such as `30.02.2024` or year `0000`.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        if !BIRTHDAY_SHAPE_RE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        match NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT) {
            Ok(date) if date.year() >= 1 => Ok(Self(date)),
            _ => Err(ValidationError::InvalidBirthday(value.to_string())),
        }
    }

    /// Get the stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
