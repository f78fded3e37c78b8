//! Owner-scoped task listing.

use crate::identity::domain::UserId;
use crate::task::{
    domain::{ParseTaskStatusError, Task, TaskFilter, TaskListQuery},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Raw listing parameters as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksRequest {
    status: Option<String>,
    search: Option<String>,
}

impl ListTasksRequest {
    /// Creates a request listing every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to a status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restricts the listing to tasks mentioning a keyword.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Errors returned by task listing.
#[derive(Debug, Error)]
pub enum TaskQueryError {
    /// The status filter is not a known value.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Read-side service for listing a user's tasks.
#[derive(Clone)]
pub struct TaskQueryService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskQueryService<R>
where
    R: TaskRepository,
{
    /// Creates a new query service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the user's tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::InvalidStatus`] for an unknown status filter
    /// and [`TaskQueryError::Repository`] when the lookup fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
        request: ListTasksRequest,
    ) -> Result<Vec<Task>, TaskQueryError> {
        let filter = TaskFilter::from_params(request.status.as_deref(), request.search.as_deref())?;
        let query = TaskListQuery::new(user_id, filter);
        Ok(self.repository.list(&query).await?)
    }
}
