//! Shared test utilities.
//!
//! This module provides common setup, helpers, and assertions for the
//! integration tests.

use address_book::{AddressBook, AddressBookManager, Contact, Session};
use std::io::Cursor;

pub mod fixtures;

/// Assert that a contact satisfies every field pattern.
#[allow(dead_code)]
pub fn assert_contact_valid(contact: &Contact) {
    for field in address_book::ContactField::ALL {
        assert!(
            field.validate(contact.get(field)).is_ok(),
            "{} should be valid, got: {}",
            field,
            contact.get(field)
        );
    }
}

/// First names of a book's contacts, in book order.
#[allow(dead_code)]
pub fn first_names(book: &AddressBook) -> Vec<&str> {
    book.contacts().iter().map(Contact::first_name).collect()
}

/// Run a session over scripted input lines and return the manager and
/// everything written to the console.
#[allow(dead_code)]
pub fn run_script(manager: AddressBookManager, lines: &[&str]) -> (AddressBookManager, String) {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut session = Session::new(manager, Cursor::new(script), Vec::new());
    session.run().expect("session should not fail on in-memory I/O");
    let (manager, output) = session.into_parts();
    let output = String::from_utf8(output).expect("session output should be UTF-8");
    (manager, output)
}
