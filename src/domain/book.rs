use super::*;

use super::contact::{Contact, ContactUpdate, display_label};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All contacts keyed by name, in insertion order.
///
/// This is the unit of persistence: stores load and save a whole book.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    contacts: IndexMap<String, Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.contacts
            .iter()
            .map(|(name, contact)| (name.as_str(), contact))
    }

    pub fn add_contact(&mut self, name: String, contact: Contact) -> Result<(), AppError> {
        if self.contacts.contains_key(&name) {
            return Err(AppError::DuplicateName(name));
        }

        self.contacts.insert(name, contact);
        Ok(())
    }

    pub fn update_contact(
        &mut self,
        name: &str,
        update: &ContactUpdate,
    ) -> Result<&Contact, AppError> {
        match self.contacts.get_mut(name) {
            Some(contact) => {
                contact.apply(update);
                Ok(contact)
            }
            None => Err(AppError::NotFound(name.to_string())),
        }
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<Contact, AppError> {
        // shift_remove keeps the remaining contacts in insertion order
        self.contacts
            .shift_remove(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))
    }

    /// Contacts whose name contains `query` (ignoring case) or whose phone
    /// contains it. An empty query matches everything.
    pub fn find(&self, query: &str) -> Vec<(&str, &Contact)> {
        let query = query.trim().to_lowercase();

        self.iter()
            .filter(|(name, contact)| {
                name.to_lowercase().contains(&query) || contact.phone.contains(&query)
            })
            .collect()
    }

    /// One display label per contact, in store order.
    pub fn labels(&self) -> Vec<String> {
        self.iter()
            .map(|(name, contact)| display_label(name, contact))
            .collect()
    }
}

impl FromIterator<(String, Contact)> for ContactBook {
    fn from_iter<I: IntoIterator<Item = (String, Contact)>>(iter: I) -> Self {
        ContactBook {
            contacts: iter.into_iter().collect(),
        }
    }
}
