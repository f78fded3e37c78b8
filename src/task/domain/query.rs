//! Listing filters for a user's tasks.

use super::{ParseTaskStatusError, Task, TaskStatus};
use crate::identity::domain::UserId;

/// Narrowing applied to a task listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskFilter {
    /// Every task of the owner.
    #[default]
    All,
    /// Tasks in the given status.
    Status(TaskStatus),
    /// Tasks whose title or description contains the keyword, ignoring case.
    Keyword(String),
}

impl TaskFilter {
    /// Builds a filter from optional `status` and `search` query parameters.
    ///
    /// Blank values count as absent. When both are present the status wins.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] when the status is not recognised.
    pub fn from_params(
        status: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, ParseTaskStatusError> {
        if let Some(raw) = status.filter(|value| !value.trim().is_empty()) {
            return TaskStatus::try_from(raw).map(Self::Status);
        }
        Ok(search
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or(Self::All, |keyword| Self::Keyword(keyword.to_owned())))
    }

    /// Returns `true` when `task` passes this filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => task.status() == *status,
            Self::Keyword(keyword) => {
                let needle = keyword.to_lowercase();
                task.title().as_str().to_lowercase().contains(&needle)
                    || task
                        .description()
                        .is_some_and(|text| text.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Listing request handed to the repository.
///
/// Results are always scoped to `owner` and returned newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListQuery {
    owner: UserId,
    filter: TaskFilter,
}

impl TaskListQuery {
    /// Creates a listing query for `owner`.
    #[must_use]
    pub const fn new(owner: UserId, filter: TaskFilter) -> Self {
        Self { owner, filter }
    }

    /// Returns the owner the listing is scoped to.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the filter.
    #[must_use]
    pub const fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Returns `true` when `task` belongs in the listing.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.is_owned_by(self.owner) && self.filter.matches(task)
    }
}
