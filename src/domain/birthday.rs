//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// Input format accepted from the user and used for display.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Locale-independent format used in persisted stores.
pub const STORE_FORMAT: &str = "%Y-%m-%d";

/// A validated calendar date of birth.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("05/11/1990").unwrap();
/// assert_eq!(birthday.to_string(), "05/11/1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `dd/mm/yyyy` date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not match the
    /// pattern or names a date that does not exist (e.g. `31/02/2024`).
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if !BIRTHDAY_REGEX.is_match(trimmed) {
            return Err(ValidationError::InvalidBirthday(input.to_string()));
        }

        NaiveDate::parse_from_str(trimmed, DISPLAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(input.to_string()))
    }

    /// Parse optional input: blank means "no birthday".
    pub fn parse_optional(input: &str) -> Result<Option<Self>, ValidationError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        Self::new(input).map(Some)
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The date this birthday is observed in `year`.
    ///
    /// 29 February falls back to 28 February in common years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The first observance on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self.in_year(today.year()) {
            Some(date) if date >= today => Some(date),
            _ => self.in_year(today.year() + 1),
        }
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(STORE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, STORE_FORMAT)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}
