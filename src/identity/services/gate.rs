//! Identity gate guarding authenticated operations.

use crate::account::ports::UserRepository;
use crate::identity::{
    domain::{IdentityError, UserId, bearer_token},
    ports::CredentialService,
};
use std::sync::Arc;
use tracing::debug;

/// Resolves an `Authorization` header into the caller's [`UserId`].
///
/// A credential is accepted only when it verifies and its subject is still a
/// registered user.
pub struct IdentityGate<K, R>
where
    K: CredentialService,
    R: UserRepository,
{
    credentials: Arc<K>,
    users: Arc<R>,
}

impl<K, R> IdentityGate<K, R>
where
    K: CredentialService,
    R: UserRepository,
{
    /// Creates a gate over the credential service and user repository.
    #[must_use]
    pub const fn new(credentials: Arc<K>, users: Arc<R>) -> Self {
        Self { credentials, users }
    }

    /// Authenticates a request from its raw `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] describing why the header was rejected,
    /// or [`IdentityError::UserLookup`] when the subject lookup fails.
    pub async fn authenticate(&self, header: Option<&str>) -> Result<UserId, IdentityError> {
        let outcome = self.resolve(header).await;
        if let Err(err) = &outcome {
            debug!(reason = %err, "rejected request credential");
        }
        outcome
    }

    async fn resolve(&self, header: Option<&str>) -> Result<UserId, IdentityError> {
        let token = bearer_token(header)?;
        let user_id = self.credentials.verify(token)?;
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(user_id),
            None => Err(IdentityError::UnknownUser(user_id)),
        }
    }
}
