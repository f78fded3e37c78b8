//! Display names for users.

use super::AccountDomainError;
use serde::Serialize;
use std::fmt;

/// Non-empty user display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Validates and wraps a display name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::MissingField`] when the name is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, AccountDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AccountDomainError::MissingField("name"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
