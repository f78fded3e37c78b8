//! Caller identity for tasktrack.
//!
//! Resolves a bearer credential presented on a request into a stable
//! [`domain::UserId`]. Everything downstream (task lifecycle, account
//! operations) consumes that identifier and nothing more. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
