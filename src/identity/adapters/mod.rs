//! Adapter implementations for credential handling.

pub mod jwt;

pub use jwt::JwtCredentialService;
