//! User aggregate root and its public profile view.

use super::{EmailAddress, PasswordHash, UserName};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Registered user.
///
/// Carries the password hash, so the aggregate itself is never serialised;
/// expose [`UserProfile`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted display name.
    pub name: UserName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted password hash.
    pub password_hash: PasswordHash,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    /// Replacement display name.
    pub name: Option<UserName>,
    /// Replacement email address.
    pub email: Option<EmailAddress>,
    /// Replacement password hash.
    pub password_hash: Option<PasswordHash>,
}

/// Serialisable view of a user without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: UserName,
    /// Email address.
    pub email: EmailAddress,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last profile change.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Registers a new user with a freshly hashed password.
    #[must_use]
    pub fn new(
        name: UserName,
        email: EmailAddress,
        password_hash: PasswordHash,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the stored password hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the public profile view.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Merges the supplied changes and refreshes `updated_at`.
    pub fn apply(&mut self, changes: UserChanges, clock: &impl Clock) {
        let UserChanges {
            name,
            email,
            password_hash,
        } = changes;
        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = email {
            self.email = value;
        }
        if let Some(value) = password_hash {
            self.password_hash = value;
        }
        self.updated_at = clock.utc();
    }
}
