//! Domain validation errors.

use super::field::ContactField;
use std::fmt;

/// Errors that can occur during domain value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A contact field does not satisfy its pattern.
    InvalidField { field: ContactField, value: String },

    /// The provided address book name is blank.
    EmptyBookName,
}

impl ValidationError {
    /// The contact field that failed, if any.
    pub fn field(&self) -> Option<ContactField> {
        match self {
            Self::InvalidField { field, .. } => Some(*field),
            Self::EmptyBookName => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidField { field, value } => write!(
                f,
                "Invalid {}: '{}' ({})",
                field.label(),
                value,
                field.rule()
            ),
            Self::EmptyBookName => write!(f, "Address book name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_names_field_and_rule() {
        let err = ValidationError::InvalidField {
            field: ContactField::Zip,
            value: "123".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("Invalid ZIP Code: '123'"));
        assert!(message.contains(ContactField::Zip.rule()));
        assert_eq!(err.field(), Some(ContactField::Zip));
    }

    #[test]
    fn test_empty_book_name_display() {
        let err = ValidationError::EmptyBookName;
        assert_eq!(err.to_string(), "Address book name cannot be empty");
        assert_eq!(err.field(), None);
    }
}
