//! A collection of uniquely named address books.

use super::address_book::AddressBook;
use crate::config::{Config, DuplicatePolicy};
use crate::domain::BookName;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Contact;

/// Address books in creation order, keyed by unique name.
#[derive(Debug, Clone, Default)]
pub struct AddressBookManager {
    books: Vec<AddressBook>,
    duplicates: DuplicatePolicy,
}

impl AddressBookManager {
    /// Create an empty manager whose books use `duplicates`.
    pub fn new(duplicates: DuplicatePolicy) -> Self {
        Self {
            books: Vec::new(),
            duplicates,
        }
    }

    /// Create a manager from configuration, including the default book if
    /// one is configured.
    pub fn from_config(config: &Config) -> AddressBookResult<Self> {
        let mut manager = Self::new(config.duplicate_policy);
        if let Some(name) = &config.default_book {
            manager.create_address_book(name)?;
        }
        Ok(manager)
    }

    /// Create a new, empty address book.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is blank
    /// - `DuplicateBook` if a book with the (trimmed) name already exists
    pub fn create_address_book(&mut self, name: &str) -> AddressBookResult<&mut AddressBook> {
        let name = BookName::new(name)?;
        if self.position(name.as_str()).is_some() {
            tracing::warn!(book = %name, "Rejected duplicate address book");
            return Err(AddressBookError::DuplicateBook(name.into_inner()));
        }

        tracing::info!(book = %name, duplicates = %self.duplicates, "Address book created");
        self.books.push(AddressBook::with_policy(name, self.duplicates));
        let index = self.books.len() - 1;
        Ok(&mut self.books[index])
    }

    pub fn get_address_book(&self, name: &str) -> Option<&AddressBook> {
        self.position(name).map(|index| &self.books[index])
    }

    pub fn get_address_book_mut(&mut self, name: &str) -> Option<&mut AddressBook> {
        match self.position(name) {
            Some(index) => Some(&mut self.books[index]),
            None => None,
        }
    }

    /// Like [`get_address_book`](Self::get_address_book), but a missing book
    /// is an error.
    pub fn address_book(&self, name: &str) -> AddressBookResult<&AddressBook> {
        self.get_address_book(name)
            .ok_or_else(|| AddressBookError::BookNotFound(name.trim().to_string()))
    }

    /// Mutable counterpart of [`address_book`](Self::address_book).
    pub fn address_book_mut(&mut self, name: &str) -> AddressBookResult<&mut AddressBook> {
        let not_found = || AddressBookError::BookNotFound(name.trim().to_string());
        self.get_address_book_mut(name).ok_or_else(not_found)
    }

    /// `(name, contact count)` for every book, in creation order.
    pub fn list_address_books(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.books.iter().map(|book| (book.name(), book.count()))
    }

    /// Contacts in any book whose city or state matches `value`, paired with
    /// the name of the book holding them.
    pub fn find_by_city_or_state(&self, value: &str) -> Vec<(&str, &Contact)> {
        self.books
            .iter()
            .flat_map(|book| {
                book.find_by_city_or_state(value)
                    .into_iter()
                    .map(move |contact| (book.name(), contact))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.books.iter().position(|book| book.name() == name)
    }
}
