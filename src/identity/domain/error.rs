//! Error types for credential resolution.

use super::UserId;
use crate::account::ports::UserRepositoryError;
use thiserror::Error;

/// Reasons a request could not be tied to an authenticated user.
///
/// Every variant except [`IdentityError::Issuance`] and
/// [`IdentityError::UserLookup`] means "unauthenticated"; the variants only
/// differ in the message class reported back to the caller.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// No authorization header was supplied.
    #[error("authorization header is missing")]
    MissingCredential,

    /// The authorization header does not carry a `Bearer <token>` value.
    #[error("authorization header must use the Bearer scheme")]
    MalformedHeader,

    /// The token failed signature, shape, or subject validation.
    #[error("bearer credential is invalid")]
    InvalidCredential,

    /// The token was well formed but its expiry has passed.
    #[error("bearer credential has expired")]
    ExpiredCredential,

    /// The token subject no longer refers to a registered user.
    #[error("credential subject {0} is not a registered user")]
    UnknownUser(UserId),

    /// A credential could not be minted.
    #[error("failed to issue bearer credential: {0}")]
    Issuance(String),

    /// Looking up the credential subject failed.
    #[error(transparent)]
    UserLookup(#[from] UserRepositoryError),
}
