//! Email address value object
//!
//! Equality is structural: two emails are equal when their normalized
//! (trimmed, lowercased) values match. Invalid input never constructs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::DomainError;

/// Validated, normalized email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email from raw input
    ///
    /// The input is trimmed, then checked against a simple
    /// `local@domain.tld` shape, then lowercased for storage.
    pub fn new(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if !Self::is_valid_shape(trimmed) {
            return Err(DomainError::InvalidEmail);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Get the normalized value
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the Email, returning the normalized String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    // Shape check: exactly one '@', non-empty whitespace-free local part,
    // whitespace-free domain with an interior dot.
    fn is_valid_shape(s: &str) -> bool {
        let Some((local, domain)) = s.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        if local.chars().any(char::is_whitespace) || domain.chars().any(char::is_whitespace) {
            return false;
        }
        match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        }
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Email::new(&raw).map_err(serde::de::Error::custom)
    }
}
