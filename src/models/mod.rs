//! Data models for the address book and the note book.
//!
//! This module contains the record types stored by the repositories and the
//! small enums used to address their fields.

pub mod contact;
pub mod note;

pub use contact::{Contact, ContactField, FieldEdit};
pub use note::{Note, NoteEntry, NoteId, NoteSortKey, SearchTarget};
