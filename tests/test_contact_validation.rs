//! Contact construction and field update validation.

mod common;

use address_book::{Contact, ContactField, ContactPatch, ValidationError};
use common::assert_contact_valid;
use common::fixtures::*;

/// Build the reference contact with one field replaced.
fn with_field(field: ContactField, value: &str) -> Result<Contact, ValidationError> {
    let mut input = john_input();
    *input.field_mut(field) = value.to_string();
    Contact::try_from(input)
}

#[test]
fn test_reference_contact_is_valid() {
    let contact = john_smith();
    assert_contact_valid(&contact);
    assert_eq!(contact.display(), "John Smith - 5551234567, john@x.com");
}

#[test]
fn test_try_from_input_matches_new() {
    let contact = Contact::try_from(john_input()).unwrap();
    assert_eq!(contact, john_smith());
}

#[test]
fn test_each_field_rejects_invalid_value() {
    let cases = [
        (ContactField::FirstName, "jo"),
        (ContactField::LastName, "smith"),
        (ContactField::Address, "1A"),
        (ContactField::City, "Spr"),
        (ContactField::State, "I"),
        (ContactField::Zip, "123"),
        (ContactField::Phone, "12345"),
        (ContactField::Email, "john.x.com"),
    ];

    for (field, value) in cases {
        let err = with_field(field, value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidField {
                field,
                value: value.to_string(),
            },
            "{} = {:?} should be rejected",
            field,
            value
        );
    }
}

#[test]
fn test_error_message_names_field_and_rule() {
    let err = with_field(ContactField::FirstName, "jo").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("First Name"), "got: {}", message);
    assert!(message.contains("'jo'"), "got: {}", message);
    assert!(message.contains("uppercase"), "got: {}", message);
}

#[test]
fn test_first_failing_field_is_reported() {
    let err = Contact::new(
        "John", "Smith", "123 Main St", "Springfield", "IL", "123", "12345", "bad",
    )
    .unwrap_err();
    assert_eq!(err.field(), Some(ContactField::Zip));
}

#[test]
fn test_set_failure_leaves_other_fields_untouched() {
    let mut contact = john_smith();
    assert!(contact.set(ContactField::Email, "nope").is_err());
    assert_eq!(contact, john_smith());

    contact.set(ContactField::Email, "john.smith@work.org").unwrap();
    assert_eq!(contact.email(), "john.smith@work.org");
    assert_eq!(contact.phone(), "5551234567");
}

#[test]
fn test_apply_validates_only_present_fields() {
    let mut contact = john_smith();
    let patch = ContactPatch::new().with(ContactField::Phone, "5559876543");
    contact.apply(&patch).unwrap();
    assert_eq!(contact.phone(), "5559876543");
    assert_contact_valid(&contact);
}

#[test]
fn test_deserialize_rejects_invalid_record() {
    let mut value = serde_json::to_value(john_smith()).unwrap();
    value["zip"] = serde_json::Value::String("123".to_string());
    let result: Result<Contact, _> = serde_json::from_value(value);
    assert!(result.is_err());
}

#[test]
fn test_address_and_city_accept_free_text() {
    for address in ["#12 Main St", "12 Main St (Rear)", "Unit 5 & 6 Oak Rd"] {
        let contact = with_field(ContactField::Address, address)
            .unwrap_or_else(|e| panic!("{:?} should be accepted: {}", address, e));
        assert_eq!(contact.address(), address);
    }

    let contact = with_field(ContactField::City, "29 Palms").unwrap();
    assert_eq!(contact.city(), "29 Palms");
}
