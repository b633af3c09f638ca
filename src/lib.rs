//! Address Book - validated contact records kept in named, in-memory address books.
//!
//! # Architecture
//!
//! - **domain**: Contact fields with their validation patterns, contact keys, book names
//! - **models**: The validated `Contact` record and its partial updates
//! - **book**: `AddressBook` and `AddressBookManager`, the in-memory store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Interactive prompt and menu session

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use book::{AddressBook, AddressBookManager, ContactListing, SortKey};
pub use cli::Session;
pub use config::{Config, DuplicatePolicy};
pub use domain::{BookName, ContactField, ContactKey, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::{Contact, ContactInput, ContactPatch};
