//! Port contracts for user storage and password hashing.

mod password_hasher;
mod user_repository;

pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use user_repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use user_repository::MockUserRepository;
