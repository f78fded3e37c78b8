//! Password hashing port.

use crate::account::domain::PasswordHash;
use thiserror::Error;

/// Hashes and verifies plaintext passwords.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produces a salted hash of `password`.
    fn hash(&self, password: &str) -> PasswordHash;

    /// Checks `password` against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError::MalformedHash`] when the stored value was
    /// not produced by this hasher.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError>;
}

/// Errors raised while verifying passwords.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordHashError {
    /// The stored hash could not be decoded.
    #[error("stored password hash is malformed")]
    MalformedHash,
}
