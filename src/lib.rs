//! Tasktrack: a multi-tenant task tracker.
//!
//! Users register, sign in with a bearer credential, and manage their own
//! tasks through a three-state workflow: `pending`, `in_progress`, and
//! `completed`. Completed tasks are immutable and are the only ones that may
//! be deleted. Every task operation is scoped to its owner; another user's
//! task behaves exactly like a missing one.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration of domain rules over the ports
//!
//! # Modules
//!
//! - [`task`]: Task aggregate, workflow rules, and lifecycle operations
//! - [`account`]: User accounts, registration, and login
//! - [`identity`]: Bearer credentials and caller resolution
//! - [`api`]: Transport-agnostic request handlers and error mapping
//! - [`config`], [`persistence`], [`telemetry`]: Process bootstrap

pub mod account;
pub mod api;
pub mod config;
pub mod identity;
pub mod persistence;
pub mod task;
pub mod telemetry;
