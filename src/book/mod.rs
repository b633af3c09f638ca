//! In-memory address book store.
//!
//! An [`AddressBook`] owns its contacts and enforces key uniqueness
//! according to its [`DuplicatePolicy`](crate::config::DuplicatePolicy).
//! An [`AddressBookManager`] owns the books and enforces name uniqueness.

mod address_book;
mod manager;

pub use address_book::{AddressBook, ContactListing, SortKey};
pub use manager::AddressBookManager;
