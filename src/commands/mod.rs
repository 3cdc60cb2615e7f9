//! Command layer: turns a line of user input into address book calls.
//!
//! - **parse**: tokenizing a line and recognising the command word
//! - **handlers**: the [`Dispatcher`] that runs commands against an [`AddressBook`](crate::AddressBook)
//! - **messages**: every user-facing reply string
//!
//! The book itself never produces text for the user. Errors travel up as
//! [`BookError`](crate::error::BookError) and are turned into fixed replies
//! here, so a failed command never ends the session.

pub mod handlers;
pub mod messages;
pub mod parse;

pub use handlers::{Dispatcher, Reply};
pub use parse::{parse_input, Command, ParsedInput};
