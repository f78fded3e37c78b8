//! Transport-agnostic request handlers.
//!
//! [`TaskTrackerApi`] exposes one method per route. An HTTP framework only
//! needs to extract the `Authorization` header, decode the payload into the
//! types in [`payloads`], and write back the returned [`ApiResponse`].

pub mod error;
mod facade;
pub mod payloads;
mod response;

pub use error::{ClassifiedError, ErrorBody, ErrorKind};
pub use facade::TaskTrackerApi;
pub use response::ApiResponse;

#[cfg(test)]
mod tests;
