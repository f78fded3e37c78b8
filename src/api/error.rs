//! Error kinds shared by every operation and their response mapping.
//!
//! Service errors stay transport-agnostic; each one reports an [`ErrorKind`]
//! through [`ClassifiedError`], and the kind alone decides the status code.
//! Storage failures are redacted before they reach a caller.

use crate::account::{
    domain::AccountDomainError,
    ports::UserRepositoryError,
    services::AccountServiceError,
};
use crate::identity::domain::IdentityError;
use crate::task::{
    domain::TaskDomainError,
    ports::TaskRepositoryError,
    services::{TaskLifecycleError, TaskQueryError},
};
use serde::Serialize;

/// Message returned in place of any storage failure detail.
pub const STORAGE_FAILURE_MESSAGE: &str = "internal storage failure";

/// Closed set of failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field was absent or blank.
    MissingField,
    /// A status value is not one of the known statuses.
    InvalidStatus,
    /// A status change breaks the workflow.
    IllegalTransition,
    /// The task is completed and cannot be modified.
    TaskLocked,
    /// An update carried no fields.
    EmptyUpdate,
    /// The task is not completed and cannot be deleted.
    DeleteNotAllowed,
    /// The resource does not exist or is not visible to the caller.
    NotFound,
    /// Login failed.
    InvalidCredentials,
    /// The email address is already registered.
    DuplicateEmail,
    /// The email address is malformed.
    InvalidEmailFormat,
    /// The request carries no usable credential.
    Unauthenticated,
    /// Storage or another internal dependency failed.
    StorageFailure,
}

impl ErrorKind {
    /// Returns the machine-readable code placed in error bodies.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidStatus => "invalid_status",
            Self::IllegalTransition => "illegal_transition",
            Self::TaskLocked => "task_locked",
            Self::EmptyUpdate => "empty_update",
            Self::DeleteNotAllowed => "delete_not_allowed",
            Self::NotFound => "not_found",
            Self::InvalidCredentials => "invalid_credentials",
            Self::DuplicateEmail => "duplicate_email",
            Self::InvalidEmailFormat => "invalid_email_format",
            Self::Unauthenticated => "unauthenticated",
            Self::StorageFailure => "storage_failure",
        }
    }

    /// Returns the HTTP status code for this kind.
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::MissingField
            | Self::InvalidStatus
            | Self::IllegalTransition
            | Self::TaskLocked
            | Self::EmptyUpdate
            | Self::DeleteNotAllowed
            | Self::DuplicateEmail
            | Self::InvalidEmailFormat => 400,
            Self::Unauthenticated | Self::InvalidCredentials => 401,
            Self::NotFound => 404,
            Self::StorageFailure => 500,
        }
    }
}

/// Errors that can be reported to callers.
pub trait ClassifiedError: std::error::Error {
    /// Returns the category of this failure.
    fn kind(&self) -> ErrorKind;
}

/// JSON error body: `{"error": <code>, "message": <text>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ErrorBody {
    /// Builds a body from a kind and message, redacting storage failures.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let text = match kind {
            ErrorKind::StorageFailure => STORAGE_FAILURE_MESSAGE.to_owned(),
            _ => message.into(),
        };
        Self {
            error: kind.code(),
            message: text,
        }
    }

    /// Builds a body describing `err`.
    #[must_use]
    pub fn from_error<E: ClassifiedError + ?Sized>(err: &E) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

const fn task_domain_kind(err: &TaskDomainError) -> ErrorKind {
    match err {
        TaskDomainError::EmptyTitle => ErrorKind::MissingField,
        TaskDomainError::EmptyUpdate => ErrorKind::EmptyUpdate,
        TaskDomainError::TaskLocked(_) => ErrorKind::TaskLocked,
        TaskDomainError::IllegalTransition { .. } => ErrorKind::IllegalTransition,
        TaskDomainError::DeleteNotAllowed { .. } => ErrorKind::DeleteNotAllowed,
    }
}

const fn task_repository_kind(err: &TaskRepositoryError) -> ErrorKind {
    match err {
        TaskRepositoryError::NotFound(_) => ErrorKind::NotFound,
        TaskRepositoryError::DuplicateTask(_) | TaskRepositoryError::Persistence(_) => {
            ErrorKind::StorageFailure
        }
    }
}

const fn user_repository_kind(err: &UserRepositoryError) -> ErrorKind {
    match err {
        UserRepositoryError::DuplicateEmail(_) => ErrorKind::DuplicateEmail,
        UserRepositoryError::NotFound(_) => ErrorKind::NotFound,
        UserRepositoryError::Persistence(_) => ErrorKind::StorageFailure,
    }
}

impl ClassifiedError for TaskLifecycleError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => task_domain_kind(err),
            Self::InvalidStatus(_) => ErrorKind::InvalidStatus,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Repository(err) => task_repository_kind(err),
        }
    }
}

impl ClassifiedError for TaskQueryError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStatus(_) => ErrorKind::InvalidStatus,
            Self::Repository(err) => task_repository_kind(err),
        }
    }
}

impl ClassifiedError for IdentityError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential
            | Self::MalformedHeader
            | Self::InvalidCredential
            | Self::ExpiredCredential
            | Self::UnknownUser(_) => ErrorKind::Unauthenticated,
            Self::Issuance(_) | Self::UserLookup(_) => ErrorKind::StorageFailure,
        }
    }
}

impl ClassifiedError for AccountServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(AccountDomainError::MissingField(_)) => ErrorKind::MissingField,
            Self::Domain(AccountDomainError::InvalidEmailFormat(_)) => {
                ErrorKind::InvalidEmailFormat
            }
            Self::Repository(err) => user_repository_kind(err),
            Self::Hashing(_) => ErrorKind::StorageFailure,
            Self::Credential(err) => err.kind(),
            Self::InvalidCredentials => ErrorKind::InvalidCredentials,
            Self::EmptyUpdate => ErrorKind::EmptyUpdate,
        }
    }
}
