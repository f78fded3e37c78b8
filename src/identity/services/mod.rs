//! Services resolving request credentials into user identities.

mod gate;

pub use gate::IdentityGate;
