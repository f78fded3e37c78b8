//! Request payloads as they arrive from clients.
//!
//! Every field is optional at this layer so that an absent value reaches the
//! services and is reported as a validation error rather than a decoding
//! failure.

use crate::account::services::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::task::services::{CreateTaskRequest, ListTasksRequest, UpdateTaskRequest};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    /// Task title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl From<CreateTaskPayload> for CreateTaskRequest {
    fn from(payload: CreateTaskPayload) -> Self {
        let mut request = Self::new(payload.title.unwrap_or_default());
        if let Some(description) = payload.description {
            request = request.with_description(description);
        }
        if let Some(due_date) = payload.due_date {
            request = request.with_due_date(due_date);
        }
        request
    }
}

/// Body of `PUT /tasks/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskPayload {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Requested status.
    pub status: Option<String>,
    /// Replacement due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl From<UpdateTaskPayload> for UpdateTaskRequest {
    fn from(payload: UpdateTaskPayload) -> Self {
        let mut request = Self::new();
        if let Some(title) = payload.title {
            request = request.with_title(title);
        }
        if let Some(description) = payload.description {
            request = request.with_description(description);
        }
        if let Some(status) = payload.status {
            request = request.with_status(status);
        }
        if let Some(due_date) = payload.due_date {
            request = request.with_due_date(due_date);
        }
        request
    }
}

/// Query string of `GET /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTasksParams {
    /// Status filter.
    pub status: Option<String>,
    /// Keyword filter.
    pub search: Option<String>,
}

impl From<ListTasksParams> for ListTasksRequest {
    fn from(params: ListTasksParams) -> Self {
        let mut request = Self::new();
        if let Some(status) = params.status {
            request = request.with_status(status);
        }
        if let Some(search) = params.search {
            request = request.with_search(search);
        }
        request
    }
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterPayload {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

impl From<RegisterPayload> for RegisterRequest {
    fn from(payload: RegisterPayload) -> Self {
        Self::new(
            payload.name.unwrap_or_default(),
            payload.email.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginPayload {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

impl From<LoginPayload> for LoginRequest {
    fn from(payload: LoginPayload) -> Self {
        Self::new(
            payload.email.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
    }
}

/// Body of `PUT /users/me`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateProfilePayload {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
    /// Replacement password.
    pub password: Option<String>,
}

impl From<UpdateProfilePayload> for UpdateProfileRequest {
    fn from(payload: UpdateProfilePayload) -> Self {
        let mut request = Self::new();
        if let Some(name) = payload.name {
            request = request.with_name(name);
        }
        if let Some(email) = payload.email {
            request = request.with_email(email);
        }
        if let Some(password) = payload.password {
            request = request.with_password(password);
        }
        request
    }
}
