//! Command dispatch against the address book.

use super::messages;
use super::parse::{parse_input, Command};
use crate::book::AddressBook;
use crate::config::Config;
use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::models::ContactRecord;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading
    Message(String),

    /// Print the message and stop
    Exit(String),

    /// Nothing to print (blank input)
    Silent,
}

impl Reply {
    /// The text to print, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Message(text) | Reply::Exit(text) => Some(text.as_str()),
            Reply::Silent => None,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// Runs commands against an owned [`AddressBook`].
///
/// # Example
///
/// ```
/// use contact_book::commands::{Dispatcher, Reply};
///
/// let mut dispatcher = Dispatcher::default();
/// dispatcher.handle_line("add Alice 0123456789");
/// assert_eq!(
///     dispatcher.handle_line("phone Alice"),
///     Reply::Message("Phone numbers for Alice: 0123456789".to_string())
/// );
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    book: AddressBook,
    today: Option<NaiveDate>,
}

impl Dispatcher {
    pub fn new(book: AddressBook) -> Self {
        Self { book, today: None }
    }

    /// Create an empty dispatcher honouring the configured date override.
    pub fn from_config(config: &Config) -> Self {
        Self {
            book: AddressBook::new(),
            today: config.today,
        }
    }

    /// Pin "today" for the `birthdays` command instead of using the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Handle one line of input. Never fails: errors become replies.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some(input) = parse_input(line) else {
            return Reply::Silent;
        };

        let command = match input.command.parse::<Command>() {
            Ok(command) => command,
            Err(_) => {
                debug!(command = %input.command, "Unknown command");
                return Reply::Message(messages::INVALID_COMMAND.to_string());
            }
        };

        debug!(%command, args = input.args.len(), "Dispatching command");

        match self.execute(command, &input.args) {
            Ok(reply) => reply,
            Err(e) => {
                if matches!(e, BookError::MissingArguments { .. }) {
                    warn!(%command, error = %e, "Command rejected");
                } else {
                    debug!(%command, error = %e, "Command failed");
                }
                Reply::Message(messages::for_error(&e))
            }
        }
    }

    /// Run a recognised command.
    pub fn execute(&mut self, command: Command, args: &[&str]) -> BookResult<Reply> {
        let text = match command {
            Command::Hello => messages::GREETING.to_string(),
            Command::Exit => return Ok(Reply::Exit(messages::FAREWELL.to_string())),
            Command::Help => messages::help(),
            Command::Add => {
                let [name, phone] = required_args::<2>(command, args)?;
                // Validate before find_or_create so a bad number leaves no empty record
                PhoneNumber::new(phone)?;
                self.book.find_or_create(name)?.add_phone(phone)?;
                messages::CONTACT_UPDATED.to_string()
            }
            Command::Change => {
                let [name, old, new] = required_args::<3>(command, args)?;
                self.record_mut(name)?.edit_phone(old, new)?;
                messages::phone_changed(name, old, new)
            }
            Command::Phone => {
                let [name] = required_args::<1>(command, args)?;
                let record = self.record(name)?;
                messages::phone_list(name, record.phones())
            }
            Command::All => {
                if self.book.is_empty() {
                    messages::NO_CONTACTS.to_string()
                } else {
                    self.book.to_string()
                }
            }
            Command::AddBirthday => {
                let [name, date] = required_args::<2>(command, args)?;
                let birthday = self.record_mut(name)?.set_birthday(date)?;
                messages::birthday_added(name, birthday)
            }
            Command::ShowBirthday => {
                let [name] = required_args::<1>(command, args)?;
                let record = self.record(name)?;
                messages::birthday_shown(name, record.birthday())
            }
            Command::Birthdays => {
                let upcoming = self.book.upcoming_birthdays(self.today());
                messages::upcoming_birthdays(&upcoming)
            }
            Command::RemovePhone => {
                let [name, phone] = required_args::<2>(command, args)?;
                self.record_mut(name)?.remove_phone(phone)?;
                messages::phone_removed(name, phone)
            }
            Command::Delete => {
                let [name] = required_args::<1>(command, args)?;
                self.book
                    .delete(name)
                    .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
                messages::contact_deleted(name)
            }
        };

        Ok(Reply::Message(text))
    }

    fn record(&self, name: &str) -> BookResult<&ContactRecord> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}

/// Take the first `N` arguments, failing if fewer were given. Extra
/// arguments are ignored.
fn required_args<'a, const N: usize>(
    command: Command,
    args: &[&'a str],
) -> BookResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or(BookError::MissingArguments {
            command: command.name(),
            expected: N,
        })
}
