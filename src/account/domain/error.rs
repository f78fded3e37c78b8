//! Error types for account value validation.

use thiserror::Error;

/// Errors returned while constructing account values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// A required field was absent or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email address does not look like `local@domain.tld`.
    #[error("invalid email format: {0}")]
    InvalidEmailFormat(String),
}
