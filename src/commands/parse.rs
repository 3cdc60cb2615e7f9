//! Input tokenization and command recognition.

use std::fmt;
use std::str::FromStr;

/// A command word understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Help,
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 12] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::RemovePhone,
        Command::Delete,
        Command::Help,
        Command::Exit,
    ];

    /// Canonical command word.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::RemovePhone => "remove-phone",
            Command::Delete => "delete",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// Usage line shown by `help` and on missing arguments.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <old phone> <new phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::Delete => "delete <name>",
            Command::Help => "help",
            Command::Exit => "exit | close",
        }
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Match a command word. Callers lowercase the word first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" | "show-birthdays" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "remove-phone" => Command::RemovePhone,
            "delete" => Command::Delete,
            "help" => Command::Help,
            "exit" | "close" => Command::Exit,
            other => return Err(UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A command word that no [`Command`] matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// First token, lowercased
    pub command: String,

    /// Remaining tokens, untouched
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace into a lowercased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some(ParsedInput {
        command,
        args: tokens.collect(),
    })
}
