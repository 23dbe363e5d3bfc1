//! Interactive front end: the user interface boundary, the command vocabulary
//! and the dispatcher that ties them to the repositories.

pub mod assistant;
pub mod commands;
pub mod ui;

pub use assistant::{Assistant, Flow};
pub use commands::{Command, NoteCommand, UnknownCommand, COMMANDS_HELP};
pub use ui::{prompt_until_valid, ConsoleUserInterface, UserInterface};
