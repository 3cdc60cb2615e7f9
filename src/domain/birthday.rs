//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// chrono format for both parsing and rendering birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date parsed from `day.month.year` text.
///
/// Birthdays are date-only; there is no timezone attached.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1.2.1990").unwrap();
/// assert_eq!(birthday.to_string(), "01.02.1990");
/// assert!(Birthday::new("1990-02-01").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` (single-digit day and month allowed).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text does not have
    /// that shape or names a date that does not exist, such as `31.02.2000`.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Render as `dd.mm.yyyy`.
    pub fn formatted(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize in display format so it round-trips through `new`
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.formatted().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("31.12.2000").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(2000, 12, 31).unwrap()
        );
        assert_eq!(birthday.month(), 12);
        assert_eq!(birthday.day(), 31);
    }

    #[test]
    fn test_birthday_rejects_other_formats() {
        assert!(Birthday::new("2000-12-31").is_err());
        assert!(Birthday::new("31/12/2000").is_err());
        assert!(Birthday::new("31.12.00").is_err());
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new(" 31.12.2000").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2000").is_err());
        assert!(Birthday::new("29.02.2001").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("01.13.2000").is_err());
        assert!(Birthday::new("29.02.2000").is_ok());
    }

    #[test]
    fn test_birthday_accepts_single_digits() {
        let birthday = Birthday::new("5.4.1985").unwrap();
        assert_eq!(birthday.formatted(), "05.04.1985");
    }

    #[test]
    fn test_birthday_error_carries_input() {
        let err = Birthday::new("tomorrow").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("tomorrow".to_string()));
    }

    #[test]
    fn test_birthday_from_str() {
        let birthday: Birthday = "01.01.2030".parse().unwrap();
        assert_eq!(birthday.to_string(), "01.01.2030");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("7.3.1999").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"07.03.1999\"");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1999-03-07\"");
        assert!(result.is_err());
    }
}
