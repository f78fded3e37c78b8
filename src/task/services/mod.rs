//! Application services for task tracking.

mod lifecycle;
mod query;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    UpdateTaskRequest,
};
pub use query::{ListTasksRequest, TaskQueryError, TaskQueryService};
