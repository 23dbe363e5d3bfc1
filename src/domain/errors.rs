//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected input so it can be logged, while the
/// user-facing message stays short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is blank.
    EmptyName,

    /// The provided phone line contains a malformed number (or no number at all).
    InvalidPhone(String),

    /// The provided birthday is not a `dd/mm/yyyy` calendar date.
    InvalidBirthday(String),

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn rejected_input(&self) -> &str {
        match self {
            Self::EmptyName => "",
            Self::InvalidPhone(raw) | Self::InvalidBirthday(raw) | Self::InvalidEmail(raw) => raw,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty!"),
            Self::InvalidPhone(_) => write!(f, "Incorrect phone number!"),
            Self::InvalidBirthday(_) => {
                write!(f, "Incorrect date! Please provide correct date format.")
            }
            Self::InvalidEmail(_) => write!(f, "Incorrect email! Please enter right email."),
        }
    }
}

impl std::error::Error for ValidationError {}
