//! Contact model representing a person in an address book.

use crate::domain::{ContactField, ContactKey, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw, unvalidated contact fields as collected from a prompt or a JSON
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

impl ContactInput {
    /// Mutable access to the raw value of one field.
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Address => &mut self.address,
            ContactField::City => &mut self.city,
            ContactField::State => &mut self.state,
            ContactField::Zip => &mut self.zip,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
        }
    }
}

/// A validated contact.
///
/// Every field satisfies its [`ContactField`] pattern for the whole life of
/// the value: construction and every mutation go through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactInput")]
pub struct Contact {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    state: String,
    zip: String,
    phone: String,
    email: String,
}

impl Contact {
    /// Create a new contact from eight raw values.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first field, in
    /// [`ContactField::ALL`] order, that does not satisfy its pattern.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::try_from(ContactInput {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            phone: phone.into(),
            email: email.into(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Full name, "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The (first name, last name) key identifying this contact in a book.
    pub fn key(&self) -> ContactKey {
        ContactKey::new(self.first_name.clone(), self.last_name.clone())
    }

    /// One-line summary: `"{first} {last} - {phone}, {email}"`.
    pub fn display(&self) -> String {
        format!(
            "{} {} - {}, {}",
            self.first_name, self.last_name, self.phone, self.email
        )
    }

    /// Get the value of one field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::Zip => &self.zip,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }

    /// Replace one field after validating the new value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidField` and leaves the contact
    /// unchanged if the value does not satisfy the field's pattern.
    pub fn set(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let value = value.into();
        field.validate(&value)?;
        *self.slot_mut(field) = value;
        Ok(())
    }

    /// Apply every change in `patch`, or none of them.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` among the patched fields; no field
    /// is modified in that case.
    pub fn apply(&mut self, patch: &ContactPatch) -> Result<(), ValidationError> {
        for (field, value) in patch.changes() {
            field.validate(value)?;
        }
        for (field, value) in patch.changes() {
            *self.slot_mut(field) = value.to_string();
        }
        Ok(())
    }

    /// The key this contact would have after `patch` is applied.
    pub fn key_after(&self, patch: &ContactPatch) -> ContactKey {
        ContactKey::new(
            patch
                .get(ContactField::FirstName)
                .unwrap_or(&self.first_name),
            patch.get(ContactField::LastName).unwrap_or(&self.last_name),
        )
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Address => &mut self.address,
            ContactField::City => &mut self.city,
            ContactField::State => &mut self.state,
            ContactField::Zip => &mut self.zip,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
        }
    }
}

impl TryFrom<ContactInput> for Contact {
    type Error = ValidationError;

    /// Fields are checked in [`ContactField::ALL`] order.
    fn try_from(input: ContactInput) -> Result<Self, Self::Error> {
        fn checked(field: ContactField, value: String) -> Result<String, ValidationError> {
            field.validate(&value)?;
            Ok(value)
        }

        Ok(Self {
            first_name: checked(ContactField::FirstName, input.first_name)?,
            last_name: checked(ContactField::LastName, input.last_name)?,
            address: checked(ContactField::Address, input.address)?,
            city: checked(ContactField::City, input.city)?,
            state: checked(ContactField::State, input.state)?,
            zip: checked(ContactField::Zip, input.zip)?,
            phone: checked(ContactField::Phone, input.phone)?,
            email: checked(ContactField::Email, input.email)?,
        })
    }
}

/// A partial update: a new value for some of a contact's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    values: BTreeMap<ContactField, String>,
}

impl ContactPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`ContactPatch::set`].
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Record a new value for `field`, replacing any earlier one.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// The pending value for `field`, if any.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Pending changes in field order.
    pub fn changes(&self) -> impl Iterator<Item = (ContactField, &str)> + '_ {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the patch changes the first or last name.
    pub fn touches_key(&self) -> bool {
        self.values.contains_key(&ContactField::FirstName)
            || self.values.contains_key(&ContactField::LastName)
    }
}
