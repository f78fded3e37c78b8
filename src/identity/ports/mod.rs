//! Port contracts for credential issuance and verification.

mod credential_service;

pub use credential_service::CredentialService;

#[cfg(test)]
pub use credential_service::MockCredentialService;
