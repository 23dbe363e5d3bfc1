//! Personal Assistant - a line-oriented contact book and note keeper.
//!
//! This library provides the record repositories behind the `personal-assistant`
//! binary: an address book keyed by contact name and an ordered note book, both
//! persisted as JSON stores, plus a small directory reorganizer.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday, email)
//! - **models**: Contact and note records
//! - **repositories**: `ContactBook`, `NoteBook` and the shared JSON store
//! - **cli**: User interface boundary, command vocabulary and dispatcher
//! - **sorter**: Moves files into category folders by extension
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod sorter;

pub use cli::{Assistant, ConsoleUserInterface, UserInterface};
pub use config::Config;
pub use error::{ConfigError, RepositoryError, StorageError};
pub use models::{Contact, ContactField, FieldEdit, Note, NoteId, NoteSortKey, SearchTarget};
pub use repositories::{ContactBook, DuplicatePolicy, NoteBook, PersistentRepository};
pub use sorter::{FileSorter, SortReport};
