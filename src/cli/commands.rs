//! Command vocabulary of the prompt loop.

use std::fmt;
use std::str::FromStr;

/// Top-level verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Search,
    Edit,
    Remove,
    Save,
    Load,
    Birthdays,
    View,
    Sorting,
    Notes,
    Help,
    Exit,
}

/// Lines shown by `help`.
pub const COMMANDS_HELP: [&str; 11] = [
    "Add",
    "Search",
    "Edit",
    "Load",
    "Remove",
    "Save",
    "Birthdays",
    "View",
    "Notes (add, find, edit, delete, sort, save, load)",
    "Sorting",
    "Exit",
];

impl Command {
    /// Whether the contact auto-save store is written after this command.
    pub fn autosaves(&self) -> bool {
        matches!(self, Command::Add | Command::Remove | Command::Edit)
    }
}

/// Error for a verb outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command `{}`", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_lowercase().as_str() {
            "add" => Command::Add,
            "search" => Command::Search,
            "edit" => Command::Edit,
            "remove" => Command::Remove,
            "save" => Command::Save,
            "load" => Command::Load,
            "birthdays" => Command::Birthdays,
            "view" => Command::View,
            "sorting" => Command::Sorting,
            "notes" => Command::Notes,
            "help" => Command::Help,
            "exit" => Command::Exit,
            _ => return Err(UnknownCommand(s.trim().to_string())),
        };
        Ok(command)
    }
}

/// Sub-verbs of `notes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteCommand {
    Add,
    Find,
    Edit,
    Delete,
    Sort,
    Save,
    Load,
}

impl NoteCommand {
    /// Whether the note auto-save store is written after this command.
    pub fn autosaves(&self) -> bool {
        matches!(self, NoteCommand::Add | NoteCommand::Delete | NoteCommand::Edit)
    }
}

impl FromStr for NoteCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_lowercase().as_str() {
            "add" => NoteCommand::Add,
            "find" => NoteCommand::Find,
            "edit" => NoteCommand::Edit,
            "delete" => NoteCommand::Delete,
            "sort" => NoteCommand::Sort,
            "save" => NoteCommand::Save,
            "load" => NoteCommand::Load,
            _ => return Err(UnknownCommand(s.trim().to_string())),
        };
        Ok(command)
    }
}
