//! Domain value objects and types.
//!
//! This module contains the contact field table with its validation
//! patterns, and type-safe wrappers for contact keys and address book
//! names. Invalid values are rejected at construction so they can never be
//! represented in a book.

pub mod book_name;
pub mod contact_key;
pub mod errors;
pub mod field;

pub use book_name::BookName;
pub use contact_key::ContactKey;
pub use errors::ValidationError;
pub use field::ContactField;
