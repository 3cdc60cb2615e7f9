//! Data models for the contact book.
//!
//! A [`ContactRecord`] groups a validated name with its phone numbers and an
//! optional birthday.

pub mod record;

pub use record::ContactRecord;
