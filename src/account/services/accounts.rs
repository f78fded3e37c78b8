//! Service layer for registration, login and profile maintenance.

use crate::account::{
    domain::{AccountDomainError, EmailAddress, User, UserChanges, UserName, UserProfile},
    ports::{PasswordHashError, PasswordHasher, UserRepository, UserRepositoryError},
};
use crate::identity::{
    domain::{BearerCredential, IdentityError, UserId},
    ports::CredentialService,
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

impl RegisterRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Partial profile update; omitted fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl UpdateProfileRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replaces the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Profile plus a freshly issued bearer credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedSession {
    /// Authenticated user's profile.
    pub user: UserProfile,
    /// Credential to present on subsequent requests.
    #[serde(flatten)]
    pub credential: BearerCredential,
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),

    /// A stored password hash could not be checked.
    #[error(transparent)]
    Hashing(#[from] PasswordHashError),

    /// A bearer credential could not be issued.
    #[error(transparent)]
    Credential(#[from] IdentityError),

    /// Unknown email or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The update request supplied no fields.
    #[error("no fields supplied for update")]
    EmptyUpdate,
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Account orchestration service.
pub struct AccountService<R, H, K, C>
where
    R: UserRepository,
    H: PasswordHasher,
    K: CredentialService,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    credentials: Arc<K>,
    clock: Arc<C>,
}

impl<R, H, K, C> AccountService<R, H, K, C>
where
    R: UserRepository,
    H: PasswordHasher,
    K: CredentialService,
    C: Clock + Send + Sync,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        hasher: Arc<H>,
        credentials: Arc<K>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            hasher,
            credentials,
            clock,
        }
    }

    /// Registers a new user and signs them in.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Domain`] for blank fields or a
    /// malformed email, and [`UserRepositoryError::DuplicateEmail`] (wrapped)
    /// when the email address is taken.
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> AccountServiceResult<AuthenticatedSession> {
        let RegisterRequest {
            name,
            email,
            password,
        } = request;
        require("name", &name)?;
        require("email", &email)?;
        require("password", &password)?;
        let user_name = UserName::new(name)?;
        let address = EmailAddress::new(email)?;

        if self.repository.find_by_email(&address).await?.is_some() {
            debug!(email = %address, "registration rejected, email taken");
            return Err(UserRepositoryError::DuplicateEmail(address).into());
        }

        let user = User::new(user_name, address, self.hasher.hash(&password), &*self.clock);
        self.repository.store(&user).await?;
        info!(user_id = %user.id(), "registered user");
        self.open_session(&user)
    }

    /// Authenticates by email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::InvalidCredentials`] for an unknown
    /// email or a wrong password without saying which.
    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> AccountServiceResult<AuthenticatedSession> {
        let LoginRequest { email, password } = request;
        require("email", &email)?;
        require("password", &password)?;
        let Ok(address) = EmailAddress::new(email) else {
            return Err(AccountServiceError::InvalidCredentials);
        };

        let Some(user) = self.repository.find_by_email(&address).await? else {
            debug!("login rejected, unknown email");
            return Err(AccountServiceError::InvalidCredentials);
        };
        if !self.hasher.verify(&password, user.password_hash())? {
            debug!(user_id = %user.id(), "login rejected, wrong password");
            return Err(AccountServiceError::InvalidCredentials);
        }

        info!(user_id = %user.id(), "user logged in");
        self.open_session(&user)
    }

    /// Returns the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] (wrapped) when the user no
    /// longer exists.
    pub async fn current_user(&self, user_id: UserId) -> AccountServiceResult<UserProfile> {
        Ok(self.find_by_id_or_error(user_id).await?.profile())
    }

    /// Applies a partial profile update.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::EmptyUpdate`] when nothing was
    /// supplied, [`AccountServiceError::Domain`] for invalid values, and
    /// repository errors for a missing user or an email owned by someone
    /// else.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> AccountServiceResult<UserProfile> {
        if request.is_empty() {
            return Err(AccountServiceError::EmptyUpdate);
        }
        let UpdateProfileRequest {
            name,
            email,
            password,
        } = request;
        let new_name = name.map(UserName::new).transpose()?;
        let new_email = email.map(EmailAddress::new).transpose()?;
        if let Some(value) = &password {
            require("password", value)?;
        }

        let mut user = self.find_by_id_or_error(user_id).await?;
        if let Some(address) = &new_email {
            let owner = self.repository.find_by_email(address).await?;
            if owner.is_some_and(|existing| existing.id() != user_id) {
                return Err(UserRepositoryError::DuplicateEmail(address.clone()).into());
            }
        }

        let changes = UserChanges {
            name: new_name,
            email: new_email,
            password_hash: password.map(|value| self.hasher.hash(&value)),
        };
        user.apply(changes, &*self.clock);
        self.repository.update(&user).await?;
        info!(user_id = %user_id, "updated user profile");
        Ok(user.profile())
    }

    /// Deletes the caller's account and returns the removed profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] (wrapped) when the user does
    /// not exist.
    pub async fn delete_account(&self, user_id: UserId) -> AccountServiceResult<UserProfile> {
        let user = self.find_by_id_or_error(user_id).await?;
        self.repository.delete(user_id).await?;
        info!(user_id = %user_id, "deleted user account");
        Ok(user.profile())
    }

    async fn find_by_id_or_error(&self, user_id: UserId) -> AccountServiceResult<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UserRepositoryError::NotFound(user_id).into())
    }

    fn open_session(&self, user: &User) -> AccountServiceResult<AuthenticatedSession> {
        let credential = self.credentials.issue(user.id())?;
        Ok(AuthenticatedSession {
            user: user.profile(),
            credential,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), AccountDomainError> {
    if value.trim().is_empty() {
        return Err(AccountDomainError::MissingField(field));
    }
    Ok(())
}
