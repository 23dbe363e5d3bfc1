//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// The name is the key of a contact in the [`ContactBook`](crate::repositories::ContactBook),
/// so it is trimmed and guaranteed non-empty at construction time.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::ContactName;
///
/// let name = ContactName::new("  Anna ").unwrap();
/// assert_eq!(name.as_str(), "Anna");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Validate a raw input line.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::new(input)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_name_valid() {
        let name = ContactName::new("Anna").unwrap();
        assert_eq!(name.as_str(), "Anna");
    }

    #[test]
    fn test_contact_name_trims() {
        let name = ContactName::new("\tDan  ").unwrap();
        assert_eq!(name.into_inner(), "Dan");
    }

    #[test]
    fn test_contact_name_rejects_blank() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
        assert_eq!(ContactName::new("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_contact_name_keeps_case() {
        assert_ne!(
            ContactName::new("anna").unwrap(),
            ContactName::new("Anna").unwrap()
        );
    }

    #[test]
    fn test_contact_name_deserialization_empty_fails() {
        let result: Result<ContactName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
