//! Task status workflow.
//!
//! Statuses advance `pending` → `in_progress` → `completed` without skipping
//! a step. A completed task is frozen: any further update is refused and
//! only deletion remains. All status changes, whether requested through a
//! general update or the dedicated completion operation, go through
//! [`validate_transition`].

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created, work not started.
    Pending,
    /// Work under way.
    InProgress,
    /// Finished; the task is read-only apart from deletion.
    Completed,
}

impl TaskStatus {
    /// Every status in workflow order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "in progress" | "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Operation through which a status change is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskOperation {
    /// General field update carrying a status.
    Update,
    /// Dedicated completion operation.
    Complete,
}

/// Workflow rule that refused a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionRejection {
    /// Completion requires the task to be in progress.
    OnlyInProgressCompletes,
    /// A pending task cannot jump straight to completed.
    SkipsInProgress,
    /// An in-progress task cannot move back to pending.
    Regression,
}

impl fmt::Display for TransitionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::OnlyInProgressCompletes => "only in_progress tasks may be completed",
            Self::SkipsInProgress => "a pending task must be started before it is completed",
            Self::Regression => "an in_progress task cannot return to pending",
        };
        f.write_str(message)
    }
}

/// Outcome of a refused status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionViolation {
    /// The task is completed and accepts no updates.
    Locked,
    /// The change breaks a workflow rule.
    Illegal(TransitionRejection),
}

/// Decides whether `current` may become `requested` through `operation`.
///
/// # Errors
///
/// Returns [`TransitionViolation::Locked`] for any update of a completed
/// task and [`TransitionViolation::Illegal`] for skips, regressions, and
/// completion of a task that is not in progress.
pub const fn validate_transition(
    current: TaskStatus,
    requested: TaskStatus,
    operation: TaskOperation,
) -> Result<(), TransitionViolation> {
    use TaskStatus::{Completed, InProgress, Pending};

    match (operation, current, requested) {
        (TaskOperation::Complete, InProgress, Completed) => Ok(()),
        (TaskOperation::Complete, _, _) => Err(TransitionViolation::Illegal(
            TransitionRejection::OnlyInProgressCompletes,
        )),
        (TaskOperation::Update, Completed, _) => Err(TransitionViolation::Locked),
        (TaskOperation::Update, Pending, Completed) => Err(TransitionViolation::Illegal(
            TransitionRejection::SkipsInProgress,
        )),
        (TaskOperation::Update, InProgress, Pending) => Err(TransitionViolation::Illegal(
            TransitionRejection::Regression,
        )),
        (TaskOperation::Update, _, _) => Ok(()),
    }
}
