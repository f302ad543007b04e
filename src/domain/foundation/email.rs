//! Email address value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,3}$").expect("email pattern compiles")
});

/// A syntactically plausible `local@domain.tld` address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validates and wraps an address. Matching is case-insensitive and the
    /// original casing is kept.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !EMAIL_SHAPE.is_match(&value) {
            return Err(ValidationError::invalid_format(
                "email",
                "must be a well-formed email address",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for addr in ["user@gmail.com", "Bob.Jackson+work@Mail.Example.ORG", "a_b%c@x-y.io"] {
            assert!(Email::new(addr).is_ok(), "{} should be accepted", addr);
        }
    }

    #[test]
    fn keeps_original_casing() {
        let email = Email::new("User@Gmail.Com").unwrap();
        assert_eq!(email.as_str(), "User@Gmail.Com");
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(
            Email::new("  ").unwrap_err(),
            ValidationError::empty_field("email")
        );
    }

    #[test]
    fn rejects_malformed() {
        for addr in ["plainaddress", "no-at.example.com", "user@domain", "user@domain.info", "us er@x.com"] {
            assert!(Email::new(addr).is_err(), "{} should be rejected", addr);
        }
    }
}
