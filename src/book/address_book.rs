//! In-memory address book keyed by contact name.

use super::upcoming::{is_upcoming, UpcomingBirthday};
use crate::error::BookResult;
use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::fmt;
use tracing::{debug, trace};

/// Contact records stored in insertion order and addressed by name.
///
/// The key of every entry is read from the record's own name, so a record
/// can never be filed under a name other than its own. Replacing a record
/// keeps the position of the one it replaces.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, ContactRecord};
///
/// let mut book = AddressBook::new();
/// let mut record = ContactRecord::with_name("Alice").unwrap();
/// record.add_phone("0123456789").unwrap();
/// book.add_record(record);
///
/// assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
/// assert!(book.find("Bob").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record stored under the same name.
    ///
    /// Returns the replaced record, if there was one. The two are not merged.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        match self.position_of(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing contact record");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                debug!(name = %record.name(), "Adding contact record");
                self.records.push(record);
                None
            }
        }
    }

    /// Remove the record stored under `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let index = self.position_of(name);
        trace!(name, found = index.is_some(), "Deleting contact record");
        index.map(|index| self.records.remove(index))
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    /// Return the record for `name`, creating an empty one if needed.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidFormat` if a new record would have to be
    /// created under an invalid name.
    pub fn find_or_create(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        let index = match self.position_of(name) {
            Some(index) => index,
            None => {
                let record = ContactRecord::with_name(name)?;
                debug!(name, "Creating contact record");
                self.records.push(record);
                self.records.len() - 1
            }
        };
        Ok(&mut self.records[index])
    }

    /// Iterate over all records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays falling later this month (today included) or anywhere in
    /// the next calendar month, in insertion order.
    ///
    /// See [`is_upcoming`] for the exact rule.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                is_upcoming(birthday, today).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date: birthday.formatted(),
                })
            })
            .collect();

        debug!(%today, count = upcoming.len(), "Computed upcoming birthdays");
        upcoming
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::error::BookError;

    fn record(name: &str, phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::with_name(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn names(book: &AddressBook) -> Vec<String> {
        book.records().map(|r| r.name().to_string()).collect()
    }

    #[test]
    fn test_add_then_find_returns_empty_record() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("Alice", &[])).is_none());

        let found = book.find("Alice").unwrap();
        assert_eq!(found.name().as_str(), "Alice");
        assert!(found.phones().is_empty());
        assert!(found.birthday().is_none());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let book = AddressBook::new();
        assert!(book.find("Nobody").is_none());
    }

    #[test]
    fn test_add_record_twice_keeps_latest() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1111111111"]));
        book.add_record(record("Bob", &[]));

        let replaced = book.add_record(record("Alice", &["2222222222"])).unwrap();

        assert_eq!(replaced.phones()[0].as_str(), "1111111111");
        assert_eq!(book.len(), 2);
        let alice = book.find("Alice").unwrap();
        assert_eq!(alice.phones().len(), 1);
        assert_eq!(alice.phones()[0].as_str(), "2222222222");
        assert_eq!(names(&book), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[]));
        book.add_record(record("Bob", &[]));

        let removed = book.delete("Alice").unwrap();
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(book.find("Alice").is_none());
        assert_eq!(names(&book), vec!["Bob"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[]));

        assert!(book.delete("Bob").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[]));

        book.find_mut("Alice").unwrap().add_phone("1111111111").unwrap();

        assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_find_or_create() {
        let mut book = AddressBook::new();
        book.find_or_create("Alice")
            .unwrap()
            .add_phone("1111111111")
            .unwrap();
        book.find_or_create("Alice")
            .unwrap()
            .add_phone("2222222222")
            .unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_find_or_create_rejects_empty_name() {
        let mut book = AddressBook::new();
        let err = book.find_or_create("").unwrap_err();
        assert_eq!(err, BookError::InvalidFormat(ValidationError::EmptyName));
        assert!(book.is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_in_insertion_order() {
        let mut book = AddressBook::new();
        for (name, birthday) in [
            ("Dana", Some("05.04.1991")),
            ("Alice", Some("20.03.1990")),
            ("Bob", Some("10.03.1985")),
            ("Carol", None),
            ("Eve", Some("05.05.2000")),
        ] {
            let mut record = record(name, &[]);
            if let Some(birthday) = birthday {
                record.set_birthday(birthday).unwrap();
            }
            book.add_record(record);
        }

        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let upcoming = book.upcoming_birthdays(today);

        assert_eq!(
            upcoming,
            vec![
                UpcomingBirthday {
                    name: "Dana".to_string(),
                    date: "05.04.1991".to_string(),
                },
                UpcomingBirthday {
                    name: "Alice".to_string(),
                    date: "20.03.1990".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_upcoming_birthdays_empty_book() {
        let book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert!(book.upcoming_birthdays(today).is_empty());
    }

    #[test]
    fn test_display_joins_records() {
        let mut book = AddressBook::new();
        assert_eq!(book.to_string(), "");

        book.add_record(record("Alice", &["1111111111"]));
        book.add_record(record("Bob", &["2222222222", "3333333333"]));

        assert_eq!(
            book.to_string(),
            "Contact name: Alice, Phones: 1111111111\n\
             Contact name: Bob, Phones: 2222222222,3333333333"
        );
    }
}
