//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus, TransitionRejection};
use thiserror::Error;

/// Errors returned by task construction and lifecycle rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,

    /// An update supplied none of the editable fields.
    #[error("no fields supplied for update")]
    EmptyUpdate,

    /// The task is completed and only deletion remains possible.
    #[error("task {0} is completed and can no longer be modified")]
    TaskLocked(TaskId),

    /// The requested status change breaks the workflow.
    #[error("task {task_id} cannot move from {from} to {to}: {reason}")]
    IllegalTransition {
        /// Task being modified.
        task_id: TaskId,
        /// Status before the change.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
        /// Rule that rejected the change.
        reason: TransitionRejection,
    },

    /// Deletion was attempted before the task was completed.
    #[error("task {task_id} can only be deleted once completed (current status: {status})")]
    DeleteNotAllowed {
        /// Task targeted for deletion.
        task_id: TaskId,
        /// Current status.
        status: TaskStatus,
    },
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status '{0}', expected pending, in_progress or completed")]
pub struct ParseTaskStatusError(pub String);
