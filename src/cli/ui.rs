//! Line-oriented user interface.
//!
//! The dispatcher only talks to the [`UserInterface`] trait, so the console
//! can be swapped for scripted input in tests.

use crate::domain::ValidationError;
use crate::models::{Contact, NoteEntry};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Everything the dispatcher needs from the person at the keyboard.
pub trait UserInterface {
    /// Show one contact card.
    fn display_contact_card(&mut self, contact: &Contact) -> io::Result<()>;

    /// Show one note.
    fn display_note(&mut self, entry: &NoteEntry) -> io::Result<()>;

    /// Show the list of available commands.
    fn display_commands(&mut self, commands: &[&str]) -> io::Result<()>;

    /// Show a short message (results, errors, hints).
    fn display_message(&mut self, message: &str) -> io::Result<()>;

    /// Prompt and read one line, without its line terminator.
    ///
    /// Invalid UTF-8 is replaced rather than reported as an error.
    ///
    /// End of input is reported as `io::ErrorKind::UnexpectedEof`.
    fn get_input(&mut self, prompt: &str) -> io::Result<String>;
}

/// Console implementation over any reader/writer pair.
pub struct ConsoleUserInterface<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleUserInterface<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUserInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> UserInterface for ConsoleUserInterface<R, W> {
    fn display_contact_card(&mut self, contact: &Contact) -> io::Result<()> {
        writeln!(self.writer, "{}", contact)?;
        writeln!(self.writer, "{}", "-".repeat(30))
    }

    fn display_note(&mut self, entry: &NoteEntry) -> io::Result<()> {
        writeln!(self.writer, "{} {}", entry.id(), entry.note())
    }

    fn display_commands(&mut self, commands: &[&str]) -> io::Result<()> {
        writeln!(self.writer, "Available commands:")?;
        for command in commands {
            writeln!(self.writer, "- {}", command)?;
        }
        Ok(())
    }

    fn display_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    fn get_input(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }

        // Undecodable bytes become U+FFFD
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }
}

/// Prompt until `validate` accepts the input, reporting each rejection.
pub fn prompt_until_valid<U, T, F>(ui: &mut U, prompt: &str, validate: F) -> io::Result<T>
where
    U: UserInterface + ?Sized,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    loop {
        let raw = ui.get_input(prompt)?;
        match validate(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(input = %err.rejected_input(), error = %err, "Input rejected");
                ui.display_message(&err.to_string())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactName, PhoneNumber};
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleUserInterface<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleUserInterface::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_get_input_strips_line_ending() {
        let mut ui = console("hello\r\nworld\n");
        assert_eq!(ui.get_input("> ").unwrap(), "hello");
        assert_eq!(ui.get_input("> ").unwrap(), "world");
        let out = String::from_utf8(ui.into_writer()).unwrap();
        assert_eq!(out, "> > ");
    }

    #[test]
    fn test_get_input_replaces_invalid_utf8() {
        let mut ui =
            ConsoleUserInterface::new(Cursor::new(b"\xff\xfeok\nnext\n".to_vec()), Vec::new());
        assert_eq!(ui.get_input("> ").unwrap(), "\u{fffd}\u{fffd}ok");
        assert_eq!(ui.get_input("> ").unwrap(), "next");
    }

    #[test]
    fn test_prompt_until_valid_with_name_parser() {
        let mut ui = console("   \n  Anna \n");
        let name = prompt_until_valid(&mut ui, "Name: ", ContactName::parse).unwrap();
        assert_eq!(name.as_str(), "Anna");

        let out = String::from_utf8(ui.into_writer()).unwrap();
        assert_eq!(out.matches("Contact name cannot be empty!").count(), 1);
    }

    #[test]
    fn test_get_input_eof() {
        let mut ui = console("");
        let err = ui.get_input("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_until_valid_retries() {
        let mut ui = console("12345\n+380501234567 bad\n+380501234567\n");
        let phones = prompt_until_valid(&mut ui, "Phones: ", PhoneNumber::parse_line).unwrap();
        assert_eq!(phones.len(), 1);

        let out = String::from_utf8(ui.into_writer()).unwrap();
        assert_eq!(out.matches("Incorrect phone number!").count(), 2);
        assert_eq!(out.matches("Phones: ").count(), 3);
    }

    #[test]
    fn test_display_commands() {
        let mut ui = console("");
        ui.display_commands(&["Add", "Exit"]).unwrap();
        let out = String::from_utf8(ui.into_writer()).unwrap();
        assert_eq!(out, "Available commands:\n- Add\n- Exit\n");
    }
}
