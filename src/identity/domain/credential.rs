//! Bearer credentials and authorization header parsing.

use super::IdentityError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

const BEARER_SCHEME: &str = "Bearer ";

/// Signed credential issued to a client after registration or login.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct BearerCredential {
    token: String,
    expires_at: DateTime<Utc>,
}

impl BearerCredential {
    /// Wraps an encoded token together with its expiry instant.
    #[must_use]
    pub const fn new(token: String, expires_at: DateTime<Utc>) -> Self {
        Self { token, expires_at }
    }

    /// Returns the encoded token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the instant after which the token is rejected.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

impl fmt::Debug for BearerCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerCredential")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Extracts the token from an `Authorization` header value.
///
/// # Errors
///
/// Returns [`IdentityError::MissingCredential`] when no header was supplied
/// and [`IdentityError::MalformedHeader`] when the value is not exactly
/// `Bearer <token>`.
pub fn bearer_token(header: Option<&str>) -> Result<&str, IdentityError> {
    let value = header.ok_or(IdentityError::MissingCredential)?;
    let token = value
        .strip_prefix(BEARER_SCHEME)
        .ok_or(IdentityError::MalformedHeader)?
        .trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(IdentityError::MalformedHeader);
    }
    Ok(token)
}
