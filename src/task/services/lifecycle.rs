//! Service layer enforcing the task workflow and ownership scoping.

use crate::identity::domain::UserId;
use crate::task::{
    domain::{
        ParseTaskStatusError, Task, TaskChanges, TaskDomainError, TaskId, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for a partial task update.
///
/// The status is carried as raw text so that unknown values surface as
/// [`TaskLifecycleError::InvalidStatus`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Requests a status change.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }

    fn into_changes(self) -> TaskLifecycleResult<TaskChanges> {
        let Self {
            title,
            description,
            status,
            due_date,
        } = self;
        let new_title = title.map(TaskTitle::new).transpose()?;
        let new_status = status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?;
        Ok(TaskChanges {
            title: new_title,
            description,
            status: new_status,
            due_date,
        })
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or a workflow rule failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The requested status is not a known value.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The task does not exist or belongs to someone else.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a pending task owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] (wrapped) for a blank title and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        owner: UserId,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            due_date,
        } = request;
        let mut task = Task::new(owner, TaskTitle::new(title)?, &*self.clock);
        if let Some(text) = description {
            task = task.with_description(text);
        }
        if let Some(due) = due_date {
            task = task.with_due_date(due);
        }

        self.repository.store(&task).await?;
        info!(task_id = %task.id(), user_id = %owner, "created task");
        Ok(task)
    }

    /// Returns a task owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is missing or
    /// owned by another user.
    pub async fn get_by_id(&self, task_id: TaskId, user_id: UserId) -> TaskLifecycleResult<Task> {
        self.load_owned(task_id, user_id).await
    }

    /// Applies a partial update to a task owned by `user_id`.
    ///
    /// # Errors
    ///
    /// In check order: [`TaskDomainError::EmptyUpdate`],
    /// [`TaskDomainError::EmptyTitle`], [`TaskLifecycleError::InvalidStatus`],
    /// [`TaskLifecycleError::NotFound`], [`TaskDomainError::TaskLocked`] and
    /// [`TaskDomainError::IllegalTransition`].
    pub async fn update(
        &self,
        task_id: TaskId,
        user_id: UserId,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        if request.is_empty() {
            return Err(TaskDomainError::EmptyUpdate.into());
        }
        let changes = request.into_changes()?;

        let mut task = self.load_owned(task_id, user_id).await?;
        task.apply_changes(changes, &*self.clock)
            .inspect_err(|err| debug!(task_id = %task_id, reason = %err, "update rejected"))?;
        self.repository.update(&task).await?;
        info!(task_id = %task_id, user_id = %user_id, status = %task.status(), "updated task");
        Ok(task)
    }

    /// Completes an in-progress task owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is not visible
    /// to the caller and [`TaskDomainError::IllegalTransition`] unless the
    /// task is in progress.
    pub async fn complete(&self, task_id: TaskId, user_id: UserId) -> TaskLifecycleResult<Task> {
        let mut task = self.load_owned(task_id, user_id).await?;
        task.complete(&*self.clock)
            .inspect_err(|err| debug!(task_id = %task_id, reason = %err, "completion rejected"))?;
        self.repository.update(&task).await?;
        info!(task_id = %task_id, user_id = %user_id, "completed task");
        Ok(task)
    }

    /// Deletes a completed task owned by `user_id` and returns its last state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is not visible
    /// to the caller and [`TaskDomainError::DeleteNotAllowed`] unless the
    /// task is completed.
    pub async fn delete(&self, task_id: TaskId, user_id: UserId) -> TaskLifecycleResult<Task> {
        let task = self.load_owned(task_id, user_id).await?;
        task.ensure_deletable()
            .inspect_err(|err| debug!(task_id = %task_id, reason = %err, "deletion rejected"))?;
        self.repository.delete(task_id).await?;
        info!(task_id = %task_id, user_id = %user_id, "deleted task");
        Ok(task)
    }

    /// Loads a task and checks ownership against the stored record.
    async fn load_owned(&self, task_id: TaskId, user_id: UserId) -> TaskLifecycleResult<Task> {
        match self.repository.find_by_id(task_id).await? {
            Some(task) if task.is_owned_by(user_id) => Ok(task),
            _ => {
                debug!(task_id = %task_id, user_id = %user_id, "task not visible to caller");
                Err(TaskLifecycleError::NotFound(task_id))
            }
        }
    }
}
