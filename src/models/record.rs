//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact: a name, its phone numbers in the order they were added, and an
/// optional birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Contact name (fixed once the record exists)
    name: Name,

    /// Phone numbers, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    /// Birthday, if one has been set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it. On error the record is unchanged.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace every phone number with the single validated `phone`.
    ///
    /// On error the existing numbers are kept.
    pub fn replace_phones(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Validate `birthday` and set it, overwriting any previous one.
    /// On error the record is unchanged.
    pub fn add_birthday(&mut self, birthday: impl AsRef<str>) -> Result<(), ValidationError> {
        let birthday = Birthday::new(birthday)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}
