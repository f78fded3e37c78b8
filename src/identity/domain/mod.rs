//! Domain model for caller identity.
//!
//! Holds the user identifier shared by every bounded context, the bearer
//! credential handed to clients, and the error taxonomy for rejected
//! credentials.

mod credential;
mod error;
mod ids;

pub use credential::{BearerCredential, bearer_token};
pub use error::IdentityError;
pub use ids::UserId;
