//! Interactive read loop.
//!
//! Generic over the input and output streams so the binary can hand it
//! stdin/stdout while tests drive it with in-memory buffers.

use crate::commands::{messages, Dispatcher};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Read commands from `input` until `exit`/`close` or end of input, writing
/// each reply to `output`.
///
/// Only I/O failures are returned; command errors are already replies.
pub fn run<R, W>(
    dispatcher: &mut Dispatcher,
    mut input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", messages::WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            break;
        }

        let reply = dispatcher.handle_line(&line);
        if let Some(text) = reply.text() {
            writeln!(output, "{}", text)?;
        }
        if reply.is_exit() {
            break;
        }
    }

    output.flush()?;
    info!(contacts = dispatcher.book().len(), "Session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut dispatcher = Dispatcher::default();
        let mut output = Vec::new();
        run(&mut dispatcher, Cursor::new(script), &mut output, "> ").unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_stops_reading() {
        let output = run_script("hello\nexit\nhello\n");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n> How can I help you?\n> Good bye!\n"
        );
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let output = run_script("hello\n");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n> How can I help you?\n> \n"
        );
    }

    #[test]
    fn test_blank_lines_print_nothing() {
        let output = run_script("\n   \nclose\n");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n> > > Good bye!\n"
        );
    }
}
