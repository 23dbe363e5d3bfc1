//! Shared fixtures for the integration tests.
//!
//! Builds sample records, scratch configurations and assistants driven by
//! scripted console input.

use chrono::NaiveDate;
use personal_assistant::domain::{Birthday, ContactName, EmailAddress, PhoneNumber};
use personal_assistant::{Assistant, Config, ConsoleUserInterface, Contact, Note};
use std::io::Cursor;
use std::path::Path;

/// Console reading from a fixed script and capturing everything written.
pub type ScriptedConsole = ConsoleUserInterface<Cursor<Vec<u8>>, Vec<u8>>;

/// Create a contact with a name and phone numbers.
pub fn sample_contact(name: &str, phones: &[&str]) -> Contact {
    Contact::new(ContactName::new(name).unwrap()).with_phones(
        phones
            .iter()
            .map(|phone| PhoneNumber::new(*phone).unwrap()),
    )
}

/// Create a contact with every field filled in.
#[allow(dead_code)]
pub fn full_contact(name: &str, birthday: &str, email: &str) -> Contact {
    sample_contact(name, &["+380501234567"])
        .with_birthday(Some(Birthday::new(birthday).unwrap()))
        .with_email(Some(EmailAddress::new(email).unwrap()))
        .with_address("Kyiv, Khreshchatyk 1")
}

/// Create a note with whitespace-separated tags.
#[allow(dead_code)]
pub fn sample_note(text: &str, tags: &str) -> Note {
    Note::new(text).with_tags(Note::parse_tags(tags))
}

/// Configuration with every store placed in `data_dir`.
pub fn scratch_config(data_dir: &Path) -> Config {
    Config {
        data_dir: data_dir.to_path_buf(),
        ..Config::default()
    }
}

/// An assistant whose console reads `script` line by line.
pub fn scripted_assistant(script: &str, data_dir: &Path) -> Assistant<ScriptedConsole> {
    let ui = ConsoleUserInterface::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    Assistant::new(scratch_config(data_dir), ui)
}

/// Everything the assistant printed.
pub fn transcript(assistant: Assistant<ScriptedConsole>) -> String {
    String::from_utf8(assistant.into_ui().into_writer()).unwrap()
}

/// Fixed clock for birthday queries: 10 March 2024.
#[allow(dead_code)]
pub fn tenth_of_march() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}
