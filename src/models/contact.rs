//! Contact model representing a person in the address book.

use crate::domain::{Birthday, ContactName, EmailAddress, PhoneNumber};
use crate::error::RepositoryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A contact in the address book.
///
/// Every field is already validated, so a `Contact` that exists is well-formed.
/// Absent birthday and email are serialized as `null`, never omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique key within the address book
    pub name: ContactName,

    /// Phone numbers (`+38` plus 10 digits)
    pub phones: BTreeSet<PhoneNumber>,

    /// Free-form postal address, may be empty
    pub address: String,

    /// Date of birth
    pub birthday: Option<Birthday>,

    /// Email address
    pub email: Option<EmailAddress>,
}

impl Contact {
    /// Create a new contact with only a name.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: BTreeSet::new(),
            address: String::new(),
            birthday: None,
            email: None,
        }
    }

    /// Builder-style setter for phone numbers.
    pub fn with_phones(mut self, phones: impl IntoIterator<Item = PhoneNumber>) -> Self {
        self.phones = phones.into_iter().collect();
        self
    }

    /// Builder-style setter for the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builder-style setter for the birthday.
    pub fn with_birthday(mut self, birthday: Option<Birthday>) -> Self {
        self.birthday = birthday;
        self
    }

    /// Builder-style setter for the email.
    pub fn with_email(mut self, email: Option<EmailAddress>) -> Self {
        self.email = email;
        self
    }

    /// Replace exactly one field.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(name) => self.name = name,
            FieldEdit::Phones(phones) => self.phones = phones,
            FieldEdit::Birthday(birthday) => self.birthday = birthday,
            FieldEdit::Address(address) => self.address = address,
            FieldEdit::Email(email) => self.email = email,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let email = self
            .email
            .as_ref()
            .map_or_else(|| "not set".to_string(), ToString::to_string);
        let birthday = self
            .birthday
            .map_or_else(|| "not set".to_string(), |b| b.to_string());

        write!(
            f,
            "Contact name: {},\nphones: {},\nemail: {},\nbirthday: {},\naddress: {}",
            self.name, phones, email, birthday, self.address
        )
    }
}

/// The editable fields of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phones,
    Birthday,
    Address,
    Email,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Phones,
        ContactField::Birthday,
        ContactField::Address,
        ContactField::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phones => "phones",
            ContactField::Birthday => "birthday",
            ContactField::Address => "address",
            ContactField::Email => "email",
        }
    }
}

impl FromStr for ContactField {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| RepositoryError::UnknownField(s.trim().to_string()))
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated replacement value for one contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(ContactName),
    Phones(BTreeSet<PhoneNumber>),
    Birthday(Option<Birthday>),
    Address(String),
    Email(Option<EmailAddress>),
}

impl FieldEdit {
    /// The field this edit replaces.
    pub fn field(&self) -> ContactField {
        match self {
            FieldEdit::Name(_) => ContactField::Name,
            FieldEdit::Phones(_) => ContactField::Phones,
            FieldEdit::Birthday(_) => ContactField::Birthday,
            FieldEdit::Address(_) => ContactField::Address,
            FieldEdit::Email(_) => ContactField::Email,
        }
    }
}
