use crate::domain::ContactName;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{Contact, FieldEdit};
use crate::repositories::traits::PersistentRepository;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// What `add` does when a contact with the same name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Replace the existing contact
    #[default]
    Overwrite,
    /// Refuse with `RepositoryError::DuplicateKey`
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(RepositoryError::InvalidArgument(format!(
                "unknown duplicate policy `{}` (expected overwrite or reject)",
                other
            ))),
        }
    }
}

/// A contact whose birthday falls inside a query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub contact: &'a Contact,
    /// Date the birthday is observed on
    pub date: NaiveDate,
    /// Days from the query date (0 = today)
    pub days_until: i64,
}

/// In-memory address book keyed by contact name.
///
/// Names compare as exact strings, so "anna" and "Anna" are different keys.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: BTreeMap<ContactName, Contact>,
    policy: DuplicatePolicy,
}

impl ContactBook {
    /// Create an empty address book with the given duplicate policy.
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            contacts: BTreeMap::new(),
            policy,
        }
    }

    /// Insert a contact under its name.
    ///
    /// Returns the contact it replaced, if any (only possible with
    /// [`DuplicatePolicy::Overwrite`]).
    pub fn add(&mut self, contact: Contact) -> RepositoryResult<Option<Contact>> {
        if self.policy == DuplicatePolicy::Reject && self.contacts.contains_key(&contact.name) {
            return Err(RepositoryError::DuplicateKey(contact.name.into_inner()));
        }

        let name = contact.name.clone();
        let replaced = self.contacts.insert(name.clone(), contact);
        info!(name = %name, replaced = replaced.is_some(), "Contact added");
        Ok(replaced)
    }

    /// Look up a contact by exact name.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        let key = ContactName::new(name).ok()?;
        self.contacts.get(&key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All contacts whose name contains `pattern`, ignoring case.
    ///
    /// An empty result means nothing matched.
    pub fn search_by_match(&self, pattern: &str) -> Vec<&Contact> {
        let pattern = pattern.to_lowercase();
        let matches: Vec<&Contact> = self
            .contacts
            .values()
            .filter(|contact| contact.name.as_str().to_lowercase().contains(&pattern))
            .collect();
        debug!(pattern = %pattern, matches = matches.len(), "Contact search");
        matches
    }

    /// Replace one field of the contact named `name`.
    ///
    /// Renaming re-keys the contact; the duplicate policy applies to the new name.
    pub fn editing_contact(&mut self, name: &str, edit: FieldEdit) -> RepositoryResult<&Contact> {
        let key = self.key_of(name)?;
        let field = edit.field();

        let key = match edit {
            FieldEdit::Name(new_name) if new_name != key => {
                if self.policy == DuplicatePolicy::Reject && self.contacts.contains_key(&new_name) {
                    return Err(RepositoryError::DuplicateKey(new_name.into_inner()));
                }
                let mut contact = self
                    .contacts
                    .remove(&key)
                    .ok_or_else(|| RepositoryError::NotFound(name.to_string()))?;
                contact.apply(FieldEdit::Name(new_name.clone()));
                self.contacts.insert(new_name.clone(), contact);
                new_name
            }
            edit => {
                if let Some(contact) = self.contacts.get_mut(&key) {
                    contact.apply(edit);
                }
                key
            }
        };

        info!(name = %key, field = %field, "Contact edited");
        self.contacts
            .get(&key)
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))
    }

    /// Remove and return the contact named `name`.
    pub fn delete(&mut self, name: &str) -> RepositoryResult<Contact> {
        let key = self.key_of(name)?;
        let removed = self
            .contacts
            .remove(&key)
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))?;
        info!(name = %key, "Contact deleted");
        Ok(removed)
    }

    /// Contacts with a birthday in `[today, today + days]`, where `days` is raw
    /// user input that must be a non-negative integer.
    pub fn list_contacts_with_day_of_birthday(
        &self,
        days: &str,
        today: NaiveDate,
    ) -> RepositoryResult<Vec<UpcomingBirthday<'_>>> {
        let days = days.trim().parse::<u32>().map_err(|_| {
            RepositoryError::InvalidArgument(format!(
                "`{}` is not a non-negative number of days",
                days.trim()
            ))
        })?;
        Ok(self.upcoming_birthdays(days, today))
    }

    /// Contacts with a birthday in `[today, today + days]`, ignoring birth year.
    ///
    /// Sorted by how soon the birthday comes, then by name.
    pub fn upcoming_birthdays(&self, days: u32, today: NaiveDate) -> Vec<UpcomingBirthday<'_>> {
        let mut upcoming: Vec<UpcomingBirthday<'_>> = self
            .contacts
            .values()
            .filter_map(|contact| {
                let birthday = contact.birthday?;
                let date = birthday.next_occurrence(today)?;
                let days_until = (date - today).num_days();
                (days_until <= i64::from(days)).then_some(UpcomingBirthday {
                    contact,
                    date,
                    days_until,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.days_until
                .cmp(&b.days_until)
                .then_with(|| a.contact.name.cmp(&b.contact.name))
        });
        debug!(days, today = %today, matches = upcoming.len(), "Birthday window query");
        upcoming
    }

    /// All contacts in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    fn key_of(&self, name: &str) -> RepositoryResult<ContactName> {
        ContactName::new(name)
            .ok()
            .filter(|key| self.contacts.contains_key(key))
            .ok_or_else(|| RepositoryError::NotFound(name.trim().to_string()))
    }
}

impl PersistentRepository for ContactBook {
    type Record = Contact;
    const KIND: &'static str = "contacts";

    fn records(&self) -> Vec<&Contact> {
        self.contacts.values().collect()
    }

    fn replace_all(&mut self, records: Vec<Contact>) {
        self.contacts = records
            .into_iter()
            .map(|contact| (contact.name.clone(), contact))
            .collect();
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

impl fmt::Display for ContactBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, contact) in self.contacts.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", contact)?;
        }
        Ok(())
    }
}
