//! User-facing reply strings.

use super::parse::Command;
use crate::book::UpcomingBirthday;
use crate::domain::{Birthday, PhoneNumber, ValidationError};
use crate::error::BookError;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command!";
pub const CONTACT_UPDATED: &str = "Contact updated";
pub const NO_CONTACTS: &str = "No contacts found.";
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays found.";

pub const INVALID_PHONE: &str = "Phone number must be a 10-digit number.";
pub const INVALID_BIRTHDAY: &str = "Invalid date format. Use DD.MM.YYYY";
pub const EMPTY_NAME: &str = "Contact name cannot be empty.";
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const PHONE_NOT_FOUND: &str = "Phone number not found.";

/// Fixed reply for each error kind.
pub fn for_error(err: &BookError) -> String {
    match err {
        BookError::InvalidFormat(ValidationError::InvalidPhone(_)) => INVALID_PHONE.to_string(),
        BookError::InvalidFormat(ValidationError::InvalidBirthday(_)) => {
            INVALID_BIRTHDAY.to_string()
        }
        BookError::InvalidFormat(ValidationError::EmptyName) => EMPTY_NAME.to_string(),
        BookError::ContactNotFound(_) => CONTACT_NOT_FOUND.to_string(),
        BookError::PhoneNotFound(_) => PHONE_NOT_FOUND.to_string(),
        BookError::MissingArguments { command, .. } => missing_arguments(command),
    }
}

/// Reply for a command given too few arguments.
pub fn missing_arguments(command: &str) -> String {
    match command.parse::<Command>() {
        Ok(command) => format!("Not enough arguments. Usage: {}", command.usage()),
        Err(_) => "Not enough arguments.".to_string(),
    }
}

pub fn phone_changed(name: &str, old: &str, new: &str) -> String {
    format!("Phone number for {} changed from {} to {}", name, old, new)
}

pub fn phone_removed(name: &str, phone: &str) -> String {
    format!("Phone number {} removed for {}", phone, name)
}

pub fn phone_list(name: &str, phones: &[PhoneNumber]) -> String {
    if phones.is_empty() {
        return format!("No phone numbers for {}", name);
    }
    let joined = phones
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Phone numbers for {}: {}", name, joined)
}

pub fn birthday_added(name: &str, birthday: &Birthday) -> String {
    format!("Birthday for {} added: {}", name, birthday)
}

pub fn birthday_shown(name: &str, birthday: Option<&Birthday>) -> String {
    match birthday {
        Some(birthday) => format!("Birthday for {}: {}", name, birthday),
        None => format!("No birthday found for {}", name),
    }
}

pub fn contact_deleted(name: &str) -> String {
    format!("Contact {} deleted.", name)
}

pub fn upcoming_birthdays(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return NO_UPCOMING_BIRTHDAYS.to_string();
    }
    let mut reply = String::from("Upcoming birthdays:");
    for entry in upcoming {
        reply.push('\n');
        reply.push_str(&format!("{}: {}", entry.name, entry.date));
    }
    reply
}

pub fn help() -> String {
    let mut reply = String::from("Available commands:");
    for command in Command::ALL {
        reply.push_str("\n  ");
        reply.push_str(command.usage());
    }
    reply
}
