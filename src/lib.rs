//! Contact Book - an interactive command-line contact manager.
//!
//! Contacts live in memory for the duration of a session. Each one has a
//! name, any number of ten digit phone numbers and an optional birthday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record built from those values
//! - **book**: The address book and the upcoming-birthday query
//! - **error**: Custom error types for precise error handling
//! - **commands**: Command parsing, dispatch and reply text
//! - **repl**: The read loop driving the dispatcher
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{Dispatcher, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::ContactRecord;
