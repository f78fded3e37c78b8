//! Validated email addresses.

use super::AccountDomainError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Email address that passed the `local@domain.tld` shape check.
///
/// Equality is exact; `Alice@example.com` and `alice@example.com` are
/// distinct addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates and wraps an email address.
    ///
    /// Surrounding whitespace is removed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::MissingField`] for a blank value and
    /// [`AccountDomainError::InvalidEmailFormat`] when the value does not
    /// match the expected shape.
    pub fn new(value: impl AsRef<str>) -> Result<Self, AccountDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AccountDomainError::MissingField("email"));
        }
        let matches = EMAIL_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(trimmed));
        if !matches {
            return Err(AccountDomainError::InvalidEmailFormat(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
