//! The address book: every contact the session knows about.
//!
//! - **address_book**: name-keyed storage of [`ContactRecord`](crate::models::ContactRecord)s
//! - **upcoming**: the upcoming-birthday rule applied over the book

pub mod address_book;
pub mod upcoming;

pub use address_book::AddressBook;
pub use upcoming::{is_upcoming, next_month, UpcomingBirthday};
