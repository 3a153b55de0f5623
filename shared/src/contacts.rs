//! Trusted emergency contacts, persisted under `emergencyContacts`.
//!
//! Ids are the creation time in milliseconds, which keeps the stored format
//! compatible with existing data. Two contacts added in the same millisecond
//! share an id, and removing that id removes both.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MAX_NAME_LENGTH: usize = 80;
pub const MAX_PHONE_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact name is required")]
    MissingName,

    #[error("phone number is required")]
    MissingPhone,

    #[error("{field} is too long ({len} > {max})")]
    TooLong { field: String, len: usize, max: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<EmergencyContact>,
}

impl ContactBook {
    pub fn add(&mut self, name: &str, phone: &str, now_ms: i64) -> Result<ContactId, ContactError> {
        let name = bounded("name", name, MAX_NAME_LENGTH, ContactError::MissingName)?;
        let phone = bounded("phone", phone, MAX_PHONE_LENGTH, ContactError::MissingPhone)?;

        let id = ContactId(now_ms);
        self.contacts.push(EmergencyContact { id, name, phone });
        Ok(id)
    }

    /// Drops every contact carrying `id`. Returns how many were removed;
    /// zero is not an error.
    pub fn remove(&mut self, id: ContactId) -> usize {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        before - self.contacts.len()
    }

    pub fn list(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    /// Persisted contacts go first; anything added before the load finished
    /// keeps its relative order after them.
    pub fn merge_loaded(&mut self, persisted: Vec<EmergencyContact>) {
        let recent = std::mem::replace(&mut self.contacts, persisted);
        self.contacts.extend(recent);
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }
}

fn bounded(field: &str, value: &str, max: usize, missing: ContactError) -> Result<String, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(missing);
    }
    let len = value.chars().count();
    if len > max {
        return Err(ContactError::TooLong {
            field: field.to_string(),
            len,
            max,
        });
    }
    Ok(value.to_string())
}
