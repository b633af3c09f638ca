//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactKey, ValidationError};
use thiserror::Error;

/// Errors that can occur when operating on address books and their contacts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A field failed its validation pattern
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with the given key exists in the book
    #[error("Contact not found: {0}")]
    ContactNotFound(ContactKey),

    /// A contact with the given key already exists in the book
    #[error("Contact already exists: {0}")]
    DuplicateContact(ContactKey),

    /// No address book with the given name exists
    #[error("Address book not found: {0}")]
    BookNotFound(String),

    /// An address book with the given name already exists
    #[error("Address book already exists: {0}")]
    DuplicateBook(String),
}

impl AddressBookError {
    /// Whether this error reports a missing contact or book.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound(_) | Self::BookNotFound(_))
    }

    /// Whether this error reports a key or name collision.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateContact(_) | Self::DuplicateBook(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
