//! Task tracking for tasktrack.
//!
//! Every task belongs to the user who created it and is only ever visible to
//! that user. Tasks move `pending` → `in_progress` → `completed`; completed
//! tasks are frozen and are the only ones that may be deleted. The module
//! follows hexagonal architecture:
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
