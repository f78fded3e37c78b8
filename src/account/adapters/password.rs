//! Salted PBKDF2-HMAC-SHA256 password hashing.

use crate::account::{
    domain::PasswordHash,
    ports::{PasswordHashError, PasswordHasher},
};
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

const SCHEME: &str = "pbkdf2-sha256";
const SALT_LEN: usize = 16;
const DIGEST_LEN: usize = 32;

/// Default PBKDF2 iteration count.
pub const DEFAULT_ROUNDS: u32 = 600_000;

/// Password hasher producing `pbkdf2-sha256$<rounds>$<salt-hex>$<digest-hex>`.
///
/// Each hash gets a fresh random 16-byte salt. Verification reads the round
/// count from the stored value, so hashes survive a change of
/// [`Pbkdf2PasswordHasher::with_rounds`].
#[derive(Debug, Clone, Copy)]
pub struct Pbkdf2PasswordHasher {
    rounds: u32,
}

impl Pbkdf2PasswordHasher {
    /// Creates a hasher using [`DEFAULT_ROUNDS`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }

    /// Overrides the iteration count for new hashes. Zero is raised to one.
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = if rounds == 0 { 1 } else { rounds };
        self
    }
}

impl Default for Pbkdf2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Pbkdf2PasswordHasher {
    fn hash(&self, password: &str) -> PasswordHash {
        let mut salt = [0_u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = derive(password.as_bytes(), &salt, self.rounds);
        PasswordHash::from_encoded(format!(
            "{SCHEME}${}${}${}",
            self.rounds,
            hex::encode(salt),
            hex::encode(digest)
        ))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        let parsed = ParsedHash::decode(hash.as_str())?;
        let candidate = derive(password.as_bytes(), &parsed.salt, parsed.rounds);
        Ok(bool::from(candidate.as_slice().ct_eq(parsed.digest.as_slice())))
    }
}

struct ParsedHash {
    rounds: u32,
    salt: Vec<u8>,
    digest: Vec<u8>,
}

impl ParsedHash {
    fn decode(encoded: &str) -> Result<Self, PasswordHashError> {
        let mut parts = encoded.split('$');
        let (Some(scheme), Some(rounds), Some(salt), Some(digest), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(PasswordHashError::MalformedHash);
        };
        if scheme != SCHEME {
            return Err(PasswordHashError::MalformedHash);
        }
        let parsed_rounds = rounds
            .parse::<u32>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or(PasswordHashError::MalformedHash)?;
        Ok(Self {
            rounds: parsed_rounds,
            salt: hex::decode(salt).map_err(|_| PasswordHashError::MalformedHash)?,
            digest: hex::decode(digest).map_err(|_| PasswordHashError::MalformedHash)?,
        })
    }
}

fn derive(password: &[u8], salt: &[u8], rounds: u32) -> [u8; DIGEST_LEN] {
    let mut digest = [0_u8; DIGEST_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut digest);
    digest
}
