//! Domain model for task tracking.
//!
//! Tasks belong to a single user and move through a three-step workflow.
//! Infrastructure concerns stay outside this boundary.

mod error;
mod ids;
mod query;
mod status;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use query::{TaskFilter, TaskListQuery};
pub use status::{
    TaskOperation, TaskStatus, TransitionRejection, TransitionViolation, validate_transition,
};
pub use task::{PersistedTaskData, Task, TaskChanges};
pub use title::TaskTitle;
