//! Task aggregate root.

use super::{
    TaskDomainError, TaskId, TaskOperation, TaskStatus, TaskTitle, TransitionViolation,
    validate_transition,
};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Task owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    #[serde(rename = "user_id")]
    owner: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted owner.
    pub owner: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Field-level changes for a task update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement description.
    pub description: Option<String>,
    /// Requested status.
    pub status: Option<TaskStatus>,
    /// Replacement due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskChanges {
    /// Returns `true` when no field is being changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }
}

impl Task {
    /// Creates a pending task owned by `owner`.
    #[must_use]
    pub fn new(owner: UserId, title: TaskTitle, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description: None,
            status: TaskStatus::Pending,
            due_date: None,
            owner,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Sets the description. Blank text leaves the task without one.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_description(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            owner: data.owner,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when `user_id` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner == user_id
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyUpdate`] when nothing changes,
    /// [`TaskDomainError::TaskLocked`] when the task is completed, and
    /// [`TaskDomainError::IllegalTransition`] when the requested status
    /// breaks the workflow. The task is left untouched on error.
    pub fn apply_changes(
        &mut self,
        changes: TaskChanges,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if changes.is_empty() {
            return Err(TaskDomainError::EmptyUpdate);
        }
        if self.status == TaskStatus::Completed {
            return Err(TaskDomainError::TaskLocked(self.id));
        }
        if let Some(requested) = changes.status {
            self.check_transition(requested, TaskOperation::Update)?;
        }

        let TaskChanges {
            title,
            description,
            status,
            due_date,
        } = changes;
        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = normalize_description(value);
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = due_date {
            self.due_date = Some(value);
        }
        self.touch(clock);
        Ok(())
    }

    /// Marks an in-progress task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IllegalTransition`] unless the task is
    /// currently in progress.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.check_transition(TaskStatus::Completed, TaskOperation::Complete)?;
        self.status = TaskStatus::Completed;
        self.touch(clock);
        Ok(())
    }

    /// Checks that the task may be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeleteNotAllowed`] unless the task is
    /// completed.
    pub const fn ensure_deletable(&self) -> Result<(), TaskDomainError> {
        match self.status {
            TaskStatus::Completed => Ok(()),
            status => Err(TaskDomainError::DeleteNotAllowed {
                task_id: self.id,
                status,
            }),
        }
    }

    fn check_transition(
        &self,
        requested: TaskStatus,
        operation: TaskOperation,
    ) -> Result<(), TaskDomainError> {
        validate_transition(self.status, requested, operation).map_err(|violation| {
            match violation {
                TransitionViolation::Locked => TaskDomainError::TaskLocked(self.id),
                TransitionViolation::Illegal(reason) => TaskDomainError::IllegalTransition {
                    task_id: self.id,
                    from: self.status,
                    to: requested,
                    reason,
                },
            }
        })
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn normalize_description(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
