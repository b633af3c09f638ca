//! A named, ordered collection of contacts.

use crate::config::DuplicatePolicy;
use crate::domain::{BookName, ContactKey};
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{Contact, ContactPatch};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Enumerate;
use std::slice::Iter;
use std::str::FromStr;

/// Ordering applied by [`AddressBook::sorted_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Last name, then first name
    Name,
    City,
    State,
    Zip,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zip" => Ok(Self::Zip),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
        };
        f.write_str(name)
    }
}

/// A named address book holding contacts in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct AddressBook {
    name: BookName,
    contacts: Vec<Contact>,
    #[serde(skip)]
    duplicates: DuplicatePolicy,
}

impl AddressBook {
    /// Create an empty book that rejects duplicate contact keys.
    pub fn new(name: BookName) -> Self {
        Self::with_policy(name, DuplicatePolicy::Reject)
    }

    /// Create an empty book with an explicit duplicate policy.
    pub fn with_policy(name: BookName, duplicates: DuplicatePolicy) -> Self {
        Self {
            name,
            contacts: Vec::new(),
            duplicates,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Append a contact.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicateContact` if the book rejects
    /// duplicates and a contact with the same key is already present.
    pub fn add_contact(&mut self, contact: Contact) -> AddressBookResult<&Contact> {
        if self.duplicates == DuplicatePolicy::Reject {
            let key = contact.key();
            if self.position(&key).is_some() {
                tracing::warn!(book = %self.name, contact = %key, "Rejected duplicate contact");
                return Err(AddressBookError::DuplicateContact(key));
            }
        }

        tracing::debug!(book = %self.name, contact = %contact.key(), "Contact added");
        self.contacts.push(contact);
        let index = self.contacts.len() - 1;
        Ok(&self.contacts[index])
    }

    /// Look up the first contact with `key`.
    pub fn get_contact(&self, key: &ContactKey) -> Option<&Contact> {
        self.position(key).map(|index| &self.contacts[index])
    }

    /// Apply a partial update to the first contact with `key`.
    ///
    /// Only the fields present in `patch` are validated and changed.
    ///
    /// # Errors
    ///
    /// - `ContactNotFound` if no contact has the key
    /// - `Validation` if a patched field fails its pattern
    /// - `DuplicateContact` if the patch renames the contact onto another
    ///   contact's key and the book rejects duplicates
    ///
    /// The contact is unchanged whenever an error is returned.
    pub fn update_contact(
        &mut self,
        key: &ContactKey,
        patch: &ContactPatch,
    ) -> AddressBookResult<&Contact> {
        let index = self
            .position(key)
            .ok_or_else(|| AddressBookError::ContactNotFound(key.clone()))?;

        if patch.touches_key() && self.duplicates == DuplicatePolicy::Reject {
            let new_key = self.contacts[index].key_after(patch);
            let collides = self
                .contacts
                .iter()
                .enumerate()
                .any(|(i, c)| i != index && new_key.matches(c.first_name(), c.last_name()));
            if collides {
                tracing::warn!(
                    book = %self.name,
                    contact = %new_key,
                    "Rejected rename onto existing contact"
                );
                return Err(AddressBookError::DuplicateContact(new_key));
            }
        }

        self.contacts[index].apply(patch)?;
        tracing::debug!(book = %self.name, contact = %key, "Contact updated");
        Ok(&self.contacts[index])
    }

    /// Remove and return the first contact with `key`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::ContactNotFound` if no contact has the key;
    /// the book is unchanged.
    pub fn delete_contact(&mut self, key: &ContactKey) -> AddressBookResult<Contact> {
        match self.position(key) {
            Some(index) => {
                tracing::debug!(book = %self.name, contact = %key, "Contact deleted");
                Ok(self.contacts.remove(index))
            }
            None => Err(AddressBookError::ContactNotFound(key.clone())),
        }
    }

    /// Display lines for every contact, in insertion order.
    ///
    /// Lines are formatted as they are pulled. Each call starts a fresh
    /// listing from the first contact.
    pub fn list_contacts(&self) -> ContactListing<'_> {
        ContactListing {
            inner: self.contacts.iter().enumerate(),
        }
    }

    /// Contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts whose city or state equals `value`, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn find_by_city_or_state(&self, value: &str) -> Vec<&Contact> {
        let value = value.trim();
        self.contacts
            .iter()
            .filter(|c| {
                c.city().eq_ignore_ascii_case(value) || c.state().eq_ignore_ascii_case(value)
            })
            .collect()
    }

    /// Contacts whose full name contains `query`, ignoring case.
    pub fn find_by_name(&self, query: &str) -> Vec<&Contact> {
        let query = query.trim().to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.full_name().to_lowercase().contains(&query))
            .collect()
    }

    /// Number of contacts per city.
    pub fn count_by_city(&self) -> BTreeMap<String, usize> {
        Self::tally(self.contacts.iter().map(Contact::city))
    }

    /// Number of contacts per state.
    pub fn count_by_state(&self) -> BTreeMap<String, usize> {
        Self::tally(self.contacts.iter().map(Contact::state))
    }

    /// Contacts ordered by `key`. The book itself keeps insertion order.
    pub fn sorted_by(&self, key: SortKey) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        match key {
            SortKey::Name => sorted.sort_by(|a, b| {
                (a.last_name(), a.first_name()).cmp(&(b.last_name(), b.first_name()))
            }),
            SortKey::City => sorted.sort_by(|a, b| a.city().cmp(b.city())),
            SortKey::State => sorted.sort_by(|a, b| a.state().cmp(b.state())),
            SortKey::Zip => sorted.sort_by(|a, b| a.zip().cmp(b.zip())),
        }
        sorted
    }

    fn position(&self, key: &ContactKey) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| key.matches(c.first_name(), c.last_name()))
    }

    fn tally<'a>(values: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for value in values {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// Lazily formatted listing lines, `"{index}. {display}"`, index from 1.
#[derive(Debug, Clone)]
pub struct ContactListing<'a> {
    inner: Enumerate<Iter<'a, Contact>>,
}

impl Iterator for ContactListing<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, contact)| format!("{}. {}", index + 1, contact.display()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ContactListing<'_> {}
