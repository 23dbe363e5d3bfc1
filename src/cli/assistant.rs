//! Command dispatcher.
//!
//! Translates verbs read from a [`UserInterface`] into repository calls. The
//! assistant owns both repositories; nothing is global.

use crate::cli::commands::{Command, NoteCommand, COMMANDS_HELP};
use crate::cli::ui::{prompt_until_valid, UserInterface};
use crate::config::Config;
use crate::domain::birthday::DISPLAY_FORMAT;
use crate::domain::{Birthday, ContactName, EmailAddress, PhoneNumber};
use crate::error::{RepositoryError, RepositoryResult, StorageError};
use crate::models::{Contact, ContactField, FieldEdit, Note, SearchTarget};
use crate::repositories::{ContactBook, NoteBook, PersistentRepository};
use crate::sorter::FileSorter;
use chrono::NaiveDate;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

const PHONES_PROMPT: &str = "Enter phones with code: +38 plus 10 numbers after:";
const BIRTHDAY_PROMPT: &str = "Birthday date in format (dd/mm/yyyy) : ";
const EMAIL_PROMPT: &str = "Email: ";

/// Whether the prompt loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The interactive assistant: an address book, a note book and a user interface.
pub struct Assistant<U: UserInterface> {
    book: ContactBook,
    notebook: NoteBook,
    ui: U,
    config: Config,
    today: fn() -> NaiveDate,
}

impl<U: UserInterface> Assistant<U> {
    /// Create an assistant with empty repositories configured from `config`.
    pub fn new(config: Config, ui: U) -> Self {
        Self {
            book: ContactBook::new(config.duplicate_policy),
            notebook: NoteBook::new(config.note_sort_key),
            ui,
            config,
            today: local_today,
        }
    }

    /// Replace the clock used by `birthdays`.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn notebook(&self) -> &NoteBook {
        &self.notebook
    }

    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Load both auto-save stores; a missing store leaves its repository empty.
    pub fn restore_autosaves(&mut self) {
        let contacts = self.config.contacts_store_path();
        let notes = self.config.notes_store_path();
        restore(&mut self.book, &contacts);
        restore(&mut self.notebook, &notes);
    }

    /// Run the prompt loop until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("End of input, leaving");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Read one command (expanding `help`) and handle it.
    pub fn step(&mut self) -> io::Result<Flow> {
        let mut raw = self
            .ui
            .get_input("Enter your command or the command Help to see a list of commands: ")?;

        if raw.trim().eq_ignore_ascii_case("help") {
            self.ui.display_commands(&COMMANDS_HELP)?;
            raw = self.ui.get_input("Choose a command: ")?;
        }

        match raw.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(unknown) => {
                debug!(command = %unknown.0, "Unknown command");
                self.ui.display_message("There is no such command!")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute one top-level command.
    ///
    /// Repository errors are reported to the user; only interface I/O errors
    /// are returned.
    pub fn handle(&mut self, command: Command) -> io::Result<Flow> {
        debug!(?command, "Handling command");
        let outcome = match command {
            Command::Add => self.add_contact(),
            Command::Search => self.search_contacts(),
            Command::Edit => self.edit_contact(),
            Command::Remove => self.remove_contact(),
            Command::Save => self.save_contacts(),
            Command::Load => self.load_contacts(),
            Command::Birthdays => self.list_birthdays(),
            Command::View => self.view_contacts(),
            Command::Sorting => self.sort_folder(),
            Command::Notes => self.handle_notes(),
            Command::Help => {
                self.ui.display_commands(&COMMANDS_HELP)?;
                Ok(Ok(()))
            }
            Command::Exit => {
                self.ui.display_message("Good bye")?;
                return Ok(Flow::Exit);
            }
        };
        self.report(outcome?)?;

        if command.autosaves() {
            let path = self.config.contacts_store_path();
            self.autosave_contacts(&path)?;
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, outcome: RepositoryResult<()>) -> io::Result<()> {
        if let Err(err) = outcome {
            warn!(error = %err, "Command failed");
            self.ui.display_message(&err.to_string())?;
        }
        Ok(())
    }

    fn autosave_contacts(&mut self, path: &Path) -> io::Result<()> {
        let result = self.book.save(path).map(|_| ());
        self.report(result)
    }

    fn autosave_notes(&mut self, path: &Path) -> io::Result<()> {
        let result = self.notebook.save(path).map(|_| ());
        self.report(result)
    }

    fn add_contact(&mut self) -> io::Result<RepositoryResult<()>> {
        let name = prompt_until_valid(&mut self.ui, "Name: ", ContactName::parse)?;
        let phones = prompt_until_valid(&mut self.ui, PHONES_PROMPT, PhoneNumber::parse_line)?;
        let birthday = prompt_until_valid(&mut self.ui, BIRTHDAY_PROMPT, Birthday::parse_optional)?;
        let email = prompt_until_valid(&mut self.ui, EMAIL_PROMPT, EmailAddress::parse_optional)?;
        let address = self.ui.get_input("Address: ")?;

        let contact = Contact::new(name)
            .with_phones(phones)
            .with_birthday(birthday)
            .with_email(email)
            .with_address(address.trim());
        self.ui.display_contact_card(&contact)?;

        Ok(self.book.add(contact).map(|_| ()))
    }

    fn search_contacts(&mut self) -> io::Result<RepositoryResult<()>> {
        let pattern = self.ui.get_input("Enter Search pattern: ")?;
        let matches = self.book.search_by_match(pattern.trim());
        if matches.is_empty() {
            self.ui.display_message("There is no such Contact name!")?;
        }
        for contact in matches {
            self.ui.display_contact_card(contact)?;
        }
        Ok(Ok(()))
    }

    fn edit_contact(&mut self) -> io::Result<RepositoryResult<()>> {
        let name = self.ui.get_input("Contact name: ")?;
        if !self.book.contains(&name) {
            return Ok(Err(RepositoryError::NotFound(name.trim().to_string())));
        }

        let raw_field = self
            .ui
            .get_input("Which parameter to edit(name, phones, birthday, address, email): ")?;
        let field = match raw_field.parse::<ContactField>() {
            Ok(field) => field,
            Err(err) => return Ok(Err(err)),
        };

        let edit = match field {
            ContactField::Name => FieldEdit::Name(prompt_until_valid(
                &mut self.ui,
                "New name: ",
                ContactName::parse,
            )?),
            ContactField::Phones => FieldEdit::Phones(prompt_until_valid(
                &mut self.ui,
                PHONES_PROMPT,
                PhoneNumber::parse_line,
            )?),
            ContactField::Birthday => FieldEdit::Birthday(prompt_until_valid(
                &mut self.ui,
                BIRTHDAY_PROMPT,
                Birthday::parse_optional,
            )?),
            ContactField::Address => {
                FieldEdit::Address(self.ui.get_input("Address: ")?.trim().to_string())
            }
            ContactField::Email => FieldEdit::Email(prompt_until_valid(
                &mut self.ui,
                EMAIL_PROMPT,
                EmailAddress::parse_optional,
            )?),
        };

        match self.book.editing_contact(&name, edit) {
            Ok(contact) => {
                self.ui.display_contact_card(contact)?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn remove_contact(&mut self) -> io::Result<RepositoryResult<()>> {
        let name = self.ui.get_input("Contact name: ")?;
        match self.book.delete(&name) {
            Ok(removed) => {
                self.ui
                    .display_message(&format!("Contact {} removed.", removed.name))?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn save_contacts(&mut self) -> io::Result<RepositoryResult<()>> {
        let file_name = self.ui.get_input("File name: ")?;
        let path = self.config.store_path(&file_name);
        match self.book.save(&path) {
            Ok(count) => {
                self.ui
                    .display_message(&format!("Saved {} contact(s) to {}.", count, path.display()))?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn load_contacts(&mut self) -> io::Result<RepositoryResult<()>> {
        let file_name = self.ui.get_input("File name: ")?;
        let path = self.config.store_path(&file_name);
        match self.book.load(&path) {
            Ok(count) => {
                self.ui
                    .display_message(&format!("Loaded {} contact(s) from {}.", count, path.display()))?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn list_birthdays(&mut self) -> io::Result<RepositoryResult<()>> {
        let days = self
            .ui
            .get_input("Enter the number of days until Birthday: ")?;
        let today = (self.today)();

        let upcoming = match self.book.list_contacts_with_day_of_birthday(&days, today) {
            Ok(upcoming) => upcoming,
            Err(err) => return Ok(Err(err)),
        };

        if upcoming.is_empty() {
            self.ui.display_message(&format!(
                "No birthdays in the next {} day(s).",
                days.trim()
            ))?;
        }
        for entry in upcoming {
            let when = match entry.days_until {
                0 => "today".to_string(),
                1 => "tomorrow".to_string(),
                n => format!("in {} days", n),
            };
            self.ui.display_message(&format!(
                "Birthday {} ({}):",
                entry.date.format(DISPLAY_FORMAT),
                when
            ))?;
            self.ui.display_contact_card(entry.contact)?;
        }
        Ok(Ok(()))
    }

    fn view_contacts(&mut self) -> io::Result<RepositoryResult<()>> {
        if self.book.is_empty() {
            self.ui.display_message("Address book is empty.")?;
        }
        for contact in self.book.iter() {
            self.ui.display_contact_card(contact)?;
        }
        Ok(Ok(()))
    }

    fn sort_folder(&mut self) -> io::Result<RepositoryResult<()>> {
        let folder = self
            .ui
            .get_input("Input path to folder where you want to sort files: ")?;
        let sorter = FileSorter::new(folder.trim());
        match sorter.sort_files() {
            Ok(report) => self.ui.display_message(&report.to_string())?,
            Err(err) => {
                warn!(folder = %sorter.root().display(), error = %err, "Sorting failed");
                self.ui
                    .display_message(&format!("Could not sort {}: {}", folder.trim(), err))?;
            }
        }
        Ok(Ok(()))
    }

    fn handle_notes(&mut self) -> io::Result<RepositoryResult<()>> {
        let raw = self.ui.get_input(
            "Which action for Notes(add, find, edit, delete, sort, save, load): ",
        )?;
        let command = match raw.parse::<NoteCommand>() {
            Ok(command) => command,
            Err(unknown) => {
                debug!(command = %unknown.0, "Unknown note command");
                self.ui
                    .display_message("There is no such command for notes!")?;
                return Ok(Ok(()));
            }
        };

        let outcome = self.handle_note_command(command)?;
        self.report(outcome)?;

        if command.autosaves() {
            let path = self.config.notes_store_path();
            self.autosave_notes(&path)?;
        }
        Ok(Ok(()))
    }

    /// Execute one `notes` sub-command.
    pub fn handle_note_command(
        &mut self,
        command: NoteCommand,
    ) -> io::Result<RepositoryResult<()>> {
        debug!(?command, "Handling note command");
        match command {
            NoteCommand::Add => {
                let text = self.ui.get_input("Enter Note text: ")?;
                let tags = self.ui.get_input("Enter Note tags: ")?;
                let note = Note::new(text.trim()).with_tags(Note::parse_tags(&tags));
                let id = self.notebook.add(note);
                if let Some(entry) = self.notebook.iter().find(|e| e.id() == id) {
                    self.ui.display_note(entry)?;
                }
                Ok(Ok(()))
            }
            NoteCommand::Find => {
                let by = self.ui.get_input("Search by tags(Y) or text(N): ")?;
                let target = if by.trim().eq_ignore_ascii_case("y") {
                    SearchTarget::Tags
                } else {
                    SearchTarget::Text
                };
                let pattern = self.ui.get_input("Enter Search pattern: ")?;
                let matches = self.notebook.find(pattern.trim(), target);
                if matches.is_empty() {
                    self.ui.display_message("No notes found.")?;
                }
                for entry in matches {
                    self.ui.display_note(entry)?;
                }
                Ok(Ok(()))
            }
            NoteCommand::Edit => {
                let pattern = self.ui.get_input("Enter pattern for note: ")?;
                let id = match self.notebook.first_match(pattern.trim()) {
                    Ok(entry) => entry.id(),
                    Err(err) => return Ok(Err(err)),
                };
                let text = self.ui.get_input("Enter new Note text: ")?;
                let tags = self.ui.get_input("Enter additional tags (blank for none): ")?;
                if let Err(err) = self.notebook.edit_note(id, text.trim()) {
                    return Ok(Err(err));
                }
                Ok(self
                    .notebook
                    .add_tags(id, Note::parse_tags(&tags))
                    .map(|_| ()))
            }
            NoteCommand::Delete => {
                let pattern = self.ui.get_input("Enter pattern for note: ")?;
                let id = match self.notebook.first_match(pattern.trim()) {
                    Ok(entry) => entry.id(),
                    Err(err) => return Ok(Err(err)),
                };
                match self.notebook.delete(id) {
                    Ok(note) => {
                        self.ui
                            .display_message(&format!("Note deleted: {}", note.text))?;
                        Ok(Ok(()))
                    }
                    Err(err) => Ok(Err(err)),
                }
            }
            NoteCommand::Sort => {
                self.notebook.sort_notes();
                self.ui.display_message(&format!(
                    "Notes sorted by {}.",
                    self.notebook.sort_key()
                ))?;
                Ok(Ok(()))
            }
            NoteCommand::Save => {
                let file_name = self.ui.get_input("File name: ")?;
                let path = self.config.store_path(&file_name);
                match self.notebook.save(&path) {
                    Ok(count) => {
                        self.ui.display_message(&format!(
                            "Saved {} note(s) to {}.",
                            count,
                            path.display()
                        ))?;
                        Ok(Ok(()))
                    }
                    Err(err) => Ok(Err(err)),
                }
            }
            NoteCommand::Load => {
                let file_name = self.ui.get_input("File name: ")?;
                let path = self.config.store_path(&file_name);
                match self.notebook.load(&path) {
                    Ok(count) => {
                        self.ui.display_message(&format!(
                            "Loaded {} note(s) from {}.",
                            count,
                            path.display()
                        ))?;
                        Ok(Ok(()))
                    }
                    Err(err) => Ok(Err(err)),
                }
            }
        }
    }
}

fn restore<R: PersistentRepository>(repo: &mut R, path: &Path) {
    match repo.load(path) {
        Ok(_) => {}
        Err(RepositoryError::Storage(StorageError::NotFound(_))) => {
            info!(kind = R::KIND, path = %path.display(), "No auto-save store yet, starting empty");
        }
        Err(err) => {
            warn!(kind = R::KIND, error = %err, "Auto-save store not loaded");
        }
    }
}
