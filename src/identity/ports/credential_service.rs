//! Credential service port.

use crate::identity::domain::{BearerCredential, IdentityError, UserId};

/// Issues and verifies bearer credentials.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialService: Send + Sync {
    /// Mints a credential whose subject is `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Issuance`] when the credential cannot be
    /// signed.
    fn issue(&self, user_id: UserId) -> Result<BearerCredential, IdentityError>;

    /// Verifies an encoded token and returns its subject.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::ExpiredCredential`] for tokens past their
    /// expiry and [`IdentityError::InvalidCredential`] for every other
    /// verification failure.
    fn verify(&self, token: &str) -> Result<UserId, IdentityError>;
}
