//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first when present.

use crate::domain::Birthday;
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

/// Prompt printed before every command when `CONTACT_BOOK_PROMPT` is unset.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// REPL prompt (default: "Enter a command: ")
    pub prompt: String,

    /// Fixed date to use as "today" for upcoming birthdays.
    /// `None` means the local system date.
    pub today: Option<NaiveDate>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOOK_PROMPT`: REPL prompt (default: "Enter a command: ")
    /// - `CONTACT_BOOK_TODAY`: `dd.mm.yyyy` date to treat as today
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let today = Self::parse_env_date("CONTACT_BOOK_TODAY")?;

        Ok(Config {
            log_level,
            prompt,
            today,
        })
    }

    /// Parse an optional `dd.mm.yyyy` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => Birthday::new(&val)
                .map(|date| Some(date.date()))
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in DD.MM.YYYY format, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            today: None,
        }
    }
}
