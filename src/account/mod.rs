//! User accounts for tasktrack.
//!
//! Covers registration, login, profile maintenance and account removal.
//! Passwords are stored only as salted hashes produced by a
//! [`ports::PasswordHasher`], and successful registration or login yields a
//! bearer credential minted by the identity context.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
