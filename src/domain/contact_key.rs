//! ContactKey value object.

use std::fmt;

/// The natural key of a contact: its first and last name.
///
/// Keys compare exactly; "John Smith" and "john smith" are different keys,
/// matching the case-sensitive name pattern contacts are validated against.
///
/// # Example
///
/// ```
/// use address_book::domain::ContactKey;
///
/// let key = ContactKey::new("John", "Smith");
/// assert_eq!(key.first_name(), "John");
/// assert_eq!(key.to_string(), "John Smith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactKey {
    first_name: String,
    last_name: String,
}

impl ContactKey {
    /// Create a key from a first and last name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Whether this key identifies a contact with the given names.
    pub fn matches(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
