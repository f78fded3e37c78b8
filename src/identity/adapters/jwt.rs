//! HS256 JSON Web Token credentials.

use crate::identity::{
    domain::{BearerCredential, IdentityError, UserId},
    ports::CredentialService,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Credential service signing tokens with a shared HMAC secret.
pub struct JwtCredentialService<C: Clock> {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<C>,
}

impl<C: Clock> JwtCredentialService<C> {
    /// Creates a service from the signing secret and token lifetime.
    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration, clock: Arc<C>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        // Expiry is judged against the injected clock in `verify`.
        validation.validate_exp = false;
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
            clock,
        }
    }

    fn sign(&self, claims: &Claims) -> Result<String, IdentityError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|err| IdentityError::Issuance(err.to_string()))
    }
}

impl<C: Clock> fmt::Debug for JwtCredentialService<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCredentialService")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl<C> CredentialService for JwtCredentialService<C>
where
    C: Clock + Send + Sync,
{
    fn issue(&self, user_id: UserId) -> Result<BearerCredential, IdentityError> {
        let issued_at = self.clock.utc();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        let token = self.sign(&claims)?;
        // Tokens carry whole seconds, so report the truncated expiry.
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| IdentityError::Issuance(format!("expiry {} out of range", claims.exp)))?;
        Ok(BearerCredential::new(token, expires_at))
    }

    fn verify(&self, token: &str) -> Result<UserId, IdentityError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |err| match err.kind() {
                JwtErrorKind::ExpiredSignature => IdentityError::ExpiredCredential,
                _ => IdentityError::InvalidCredential,
            },
        )?;
        if data.claims.exp <= self.clock.utc().timestamp() {
            return Err(IdentityError::ExpiredCredential);
        }
        UserId::parse(&data.claims.sub).ok_or(IdentityError::InvalidCredential)
    }
}
