//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers, birthdays and email addresses. These value objects
//! validate at construction time (and on deserialization), so an invalid
//! field can never be represented in a record.

pub mod birthday;
pub mod contact_name;
pub mod email;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use contact_name::ContactName;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
