//! Contact fields and their validation patterns.
//!
//! Every field of a [`Contact`](crate::models::Contact) maps to exactly one
//! compiled pattern through [`ContactField::pattern`]. Adding a field means
//! adding a variant, and the exhaustive `match` arms then force a label, a
//! rule and a pattern for it.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z]{2,}$").expect("Failed to compile name regex"));

// Address and city only enforce a minimum length of printable text.
static FREE_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\p{Cc}][^\p{Cc}]{3,}$").expect("Failed to compile free text regex")
});

// Two letters minimum so postal abbreviations ("IL", "NY") are accepted.
static STATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z .'-]{1,}$").expect("Failed to compile state regex")
});

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5,6}$").expect("Failed to compile zip regex"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Failed to compile email regex")
});

/// One of the eight fields of a contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl ContactField {
    /// All fields, in the order they are prompted for and validated.
    pub const ALL: [ContactField; 8] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Address,
        ContactField::City,
        ContactField::State,
        ContactField::Zip,
        ContactField::Phone,
        ContactField::Email,
    ];

    /// Human-readable label, as shown in prompts and errors.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "ZIP Code",
            Self::Phone => "Phone Number",
            Self::Email => "Email",
        }
    }

    /// Description of the rule a value must satisfy.
    pub fn rule(self) -> &'static str {
        match self {
            Self::FirstName | Self::LastName => {
                "must start with an uppercase letter and contain at least 3 letters"
            }
            Self::Address | Self::City => {
                "must be at least 4 characters long and not start with a space"
            }
            Self::State => "must start with a letter and be at least 2 characters long",
            Self::Zip => "must be 5 or 6 digits",
            Self::Phone => "must be exactly 10 digits",
            Self::Email => "must look like name@domain.tld",
        }
    }

    /// The compiled pattern for this field.
    pub fn pattern(self) -> &'static Regex {
        match self {
            Self::FirstName | Self::LastName => &NAME_REGEX,
            Self::Address | Self::City => &FREE_TEXT_REGEX,
            Self::State => &STATE_REGEX,
            Self::Zip => &ZIP_REGEX,
            Self::Phone => &PHONE_REGEX,
            Self::Email => &EMAIL_REGEX,
        }
    }

    /// Check a raw value against this field's pattern.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidField` carrying the field and the
    /// rejected value.
    pub fn validate(self, value: &str) -> Result<(), ValidationError> {
        if self.pattern().is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidField {
                field: self,
                value: value.to_string(),
            })
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactField {
    type Err = String;

    /// Parse a field from its snake_case name or its label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "address" => Ok(Self::Address),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zip" | "zipcode" => Ok(Self::Zip),
            "phone" | "phonenumber" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            _ => Err(format!("Unknown contact field: {}", s)),
        }
    }
}
