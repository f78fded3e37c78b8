//! Transport-agnostic responses.

use super::error::{ClassifiedError, ErrorBody, ErrorKind};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

/// Status code plus optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    body: Option<Value>,
}

impl ApiResponse {
    /// `200 OK` with a JSON body.
    #[must_use]
    pub fn ok(value: &impl Serialize) -> Self {
        Self::json(200, value)
    }

    /// `201 Created` with a JSON body.
    #[must_use]
    pub fn created(value: &impl Serialize) -> Self {
        Self::json(201, value)
    }

    /// `204 No Content`.
    #[must_use]
    pub const fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// Error response describing `err`.
    #[must_use]
    pub fn error<E: ClassifiedError + ?Sized>(err: &E) -> Self {
        let kind = err.kind();
        if kind == ErrorKind::StorageFailure {
            error!(error = %err, "request failed on an internal dependency");
        } else {
            debug!(kind = kind.code(), error = %err, "request rejected");
        }
        Self::failure(kind, err.to_string())
    }

    /// Error response for a kind and message.
    #[must_use]
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::json(kind.status(), &ErrorBody::new(kind, message))
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consumes the response, returning its body.
    #[must_use]
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    fn json(status: u16, value: &impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self {
                status,
                body: Some(body),
            },
            Err(err) => {
                error!(error = %err, "failed to serialise response body");
                let fallback = ErrorBody::new(ErrorKind::StorageFailure, "");
                Self {
                    status: ErrorKind::StorageFailure.status(),
                    body: Some(serde_json::json!({
                        "error": fallback.error,
                        "message": fallback.message,
                    })),
                }
            }
        }
    }
}
