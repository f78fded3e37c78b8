//! Domain model for user accounts.

mod email;
mod error;
mod name;
mod password;
mod user;

pub use email::EmailAddress;
pub use error::AccountDomainError;
pub use name::UserName;
pub use password::PasswordHash;
pub use user::{PersistedUserData, User, UserChanges, UserProfile};
