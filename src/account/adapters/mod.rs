//! Adapter implementations for account ports.

pub mod memory;
pub mod password;
pub mod postgres;

pub use password::Pbkdf2PasswordHasher;
