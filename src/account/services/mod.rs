//! Application services for account operations.

mod accounts;

pub use accounts::{
    AccountService, AccountServiceError, AccountServiceResult, AuthenticatedSession,
    LoginRequest, RegisterRequest, UpdateProfileRequest,
};
