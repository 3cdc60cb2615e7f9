//! Contact record: one person with their phone numbers and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones keep insertion order and may
/// contain duplicates; lookups always act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate `name` and create an empty record for it.
    pub fn with_name(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidFormat` if `raw` is not a ten digit number.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the record has no such number.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<PhoneNumber> {
        let index = self
            .position_of(value)
            .ok_or_else(|| BookError::PhoneNotFound(value.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated before the lookup, so an invalid replacement never
    /// touches the list.
    ///
    /// # Errors
    ///
    /// - `BookError::InvalidFormat` if `new` is not a valid phone number
    /// - `BookError::PhoneNotFound` if `old` is not in the record
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == value)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<&Birthday> {
        let birthday = Birthday::new(raw)?;
        Ok(&*self.birthday.insert(birthday))
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone == value)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "Contact name: {}, Phones: {}", self.name, phones)
    }
}
