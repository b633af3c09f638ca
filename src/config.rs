//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How a book treats a contact whose (first name, last name) key is
/// already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Adding or renaming onto an existing key fails
    #[default]
    Reject,

    /// Several contacts may share a key; key lookups act on the first one
    Allow,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "allow" => Ok(Self::Allow),
            other => Err(format!("Must be 'reject' or 'allow', got: {}", other)),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Allow => write!(f, "allow"),
        }
    }
}

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Duplicate contact handling (default: reject)
    pub duplicate_policy: DuplicatePolicy,

    /// Address book created at startup, if any
    pub default_book: Option<String>,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_DUPLICATES`: `reject` or `allow` (default: reject)
    /// - `ADDRESS_BOOK_DEFAULT_BOOK`: book to create at startup (default: none)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let duplicate_policy =
            Self::parse_env("ADDRESS_BOOK_DUPLICATES", DuplicatePolicy::default())?;

        let default_book = match env::var("ADDRESS_BOOK_DEFAULT_BOOK") {
            Ok(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_DEFAULT_BOOK".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(name) => Some(name.trim().to_string()),
            Err(_) => None,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            duplicate_policy,
            default_book,
            log_level,
        })
    }

    /// Parse an environment variable with a default value.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr<Err = String>,
    {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            duplicate_policy: DuplicatePolicy::Reject,
            default_book: None,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert!(config.default_book.is_none());
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_duplicate_policy_from_str() {
        assert_eq!("reject".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Reject));
        assert_eq!(" Allow ".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Allow));
        assert!("sometimes".parse::<DuplicatePolicy>().is_err());
        assert_eq!(DuplicatePolicy::Allow.to_string(), "allow");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_DUPLICATES", "allow");
        guard.set("ADDRESS_BOOK_DEFAULT_BOOK", " Family ");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Allow);
        assert_eq!(config.default_book.as_deref(), Some("Family"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_duplicates() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_DUPLICATES", "maybe");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ADDRESS_BOOK_DUPLICATES");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_blank_default_book() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_DEFAULT_BOOK", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "ADDRESS_BOOK_DEFAULT_BOOK");
        }
    }

    #[test]
    #[serial]
    fn test_parse_env() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_DUPLICATE_POLICY", "allow");

        let result = Config::parse_env("TEST_DUPLICATE_POLICY", DuplicatePolicy::Reject);
        assert_eq!(result.unwrap(), DuplicatePolicy::Allow);

        let result = Config::parse_env("NONEXISTENT_POLICY", DuplicatePolicy::Reject);
        assert_eq!(result.unwrap(), DuplicatePolicy::Reject);
    }
}
