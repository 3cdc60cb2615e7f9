//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and dispatchers so each test
//! file starts from the same known address book.

use chrono::NaiveDate;
use contact_book::{AddressBook, ContactRecord, Dispatcher};

/// Create a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> ContactRecord {
    let mut record = ContactRecord::with_name(name).expect("valid fixture name");
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("valid fixture birthday");
    }
    record
}

/// A small book with a mix of birthdays around mid-March.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Alice", &["0123456789"], Some("20.03.1990")));
    book.add_record(sample_record("Bob", &["1112223333"], Some("10.03.1985")));
    book.add_record(sample_record("Carol", &["4445556666"], Some("05.04.1992")));
    book.add_record(sample_record("Dave", &["7778889999"], Some("05.05.1970")));
    book.add_record(sample_record("Erin", &[], None));
    book
}

/// 15 March 2024, the reference "today" for birthday tests.
pub fn mid_march() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

/// A dispatcher over an empty book with "today" pinned to [`mid_march`].
#[allow(dead_code)]
pub fn pinned_dispatcher() -> Dispatcher {
    Dispatcher::default().with_today(mid_march())
}
