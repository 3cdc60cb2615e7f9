//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so
//! they never interleave with replies.

use anyhow::{Context, Result};
use contact_book::{repl, Config, Dispatcher};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the REPL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");
    if let Some(today) = config.today {
        info!(%today, "Using fixed date for upcoming birthdays");
    }

    let mut dispatcher = Dispatcher::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl::run(&mut dispatcher, stdin.lock(), stdout.lock(), &config.prompt) {
        error!("Session aborted: {}", e);
        return Err(e).context("I/O error while running the session");
    }

    Ok(())
}
