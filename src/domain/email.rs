//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
        .expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// The local part allows letters, digits and `_ . + -`; the domain needs at
/// least one dot after its first label.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let trimmed = email.trim();

        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Parse optional input: blank means "no email".
    pub fn parse_optional(input: &str) -> Result<Option<Self>, ValidationError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        Self::new(input).map(Some)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
