//! Test fixtures and sample data.
//!
//! This module provides reusable contacts, raw field tuples and prepared
//! books for the integration tests.

use address_book::{AddressBook, BookName, Contact, ContactInput, DuplicatePolicy};

/// The eight raw fields of the reference contact, in prompt order.
pub const JOHN_FIELDS: [&str; 8] = [
    "John",
    "Smith",
    "123 Main St",
    "Springfield",
    "IL",
    "62704",
    "5551234567",
    "john@x.com",
];

/// The reference contact: John Smith of Springfield, IL.
pub fn john_smith() -> Contact {
    let [first, last, address, city, state, zip, phone, email] = JOHN_FIELDS;
    Contact::new(first, last, address, city, state, zip, phone, email)
        .expect("reference contact should be valid")
}

/// Raw input for the reference contact.
#[allow(dead_code)]
pub fn john_input() -> ContactInput {
    let [first, last, address, city, state, zip, phone, email] = JOHN_FIELDS;
    ContactInput {
        first_name: first.to_string(),
        last_name: last.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip: zip.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    }
}

/// Create a sample contact with a name and location.
pub fn sample_contact(first_name: &str, last_name: &str, city: &str, state: &str) -> Contact {
    Contact::new(
        first_name,
        last_name,
        "42 Elm Street",
        city,
        state,
        "400088",
        "9876543210",
        format!("{}.{}@example.com", first_name, last_name).to_lowercase(),
    )
    .expect("sample contact should be valid")
}

/// An empty book named `name` that rejects duplicate keys.
pub fn empty_book(name: &str) -> AddressBook {
    AddressBook::new(BookName::new(name).expect("book name should be valid"))
}

/// A book holding John Smith plus two contacts elsewhere.
#[allow(dead_code)]
pub fn populated_book() -> AddressBook {
    let mut book = empty_book("Family");
    book.add_contact(john_smith()).unwrap();
    book.add_contact(sample_contact("Jane", "Doe", "Austin", "TX"))
        .unwrap();
    book.add_contact(sample_contact("Bob", "Jones", "Chicago", "IL"))
        .unwrap();
    book
}

/// An empty book that accepts duplicate keys.
#[allow(dead_code)]
pub fn permissive_book(name: &str) -> AddressBook {
    AddressBook::with_policy(
        BookName::new(name).expect("book name should be valid"),
        DuplicatePolicy::Allow,
    )
}
