//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+38[0-9]{10}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for Ukrainian phone numbers.
///
/// A valid number is the `+38` country code followed by exactly ten digits,
/// e.g. `+380501234567`. The number is stored verbatim.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+381234567890").unwrap();
/// assert_eq!(phone.as_str(), "+381234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match `+38` plus 10 digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_REGEX.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Parse a whitespace-separated line of phone numbers.
    ///
    /// The line must hold at least one number, and a single malformed token
    /// rejects the whole line.
    pub fn parse_line(line: &str) -> Result<BTreeSet<Self>, ValidationError> {
        let phones = line
            .split_whitespace()
            .map(Self::new)
            .collect::<Result<BTreeSet<_>, _>>()?;

        if phones.is_empty() {
            return Err(ValidationError::InvalidPhone(line.to_string()));
        }

        Ok(phones)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("+381234567890").unwrap();
        assert_eq!(phone.as_str(), "+381234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("12345").is_err());
        assert!(PhoneNumber::new("381234567890").is_err());
        assert!(PhoneNumber::new("+38123456789").is_err());
        assert!(PhoneNumber::new("+3812345678901").is_err());
        assert!(PhoneNumber::new("+39 1234567890").is_err());
        assert!(PhoneNumber::new("+38050123456a").is_err());
        assert!(PhoneNumber::new("+380501234567").is_ok());
    }

    #[test]
    fn test_parse_line_multiple() {
        let phones = PhoneNumber::parse_line("+380501234567   +380671112233").unwrap();
        assert_eq!(phones.len(), 2);
    }

    #[test]
    fn test_parse_line_deduplicates() {
        let phones = PhoneNumber::parse_line("+380501234567 +380501234567").unwrap();
        assert_eq!(phones.len(), 1);
    }

    #[test]
    fn test_parse_line_one_bad_token_rejects_line() {
        let err = PhoneNumber::parse_line("+380501234567 12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
    }

    #[test]
    fn test_parse_line_requires_a_number() {
        assert!(PhoneNumber::parse_line("").is_err());
        assert!(PhoneNumber::parse_line("   ").is_err());
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("+381234567890").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+381234567890\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
