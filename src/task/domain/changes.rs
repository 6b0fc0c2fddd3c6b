//! Field-level change set applied to an existing task.

use super::{Status, TaskDomainError, TaskTitle};
use chrono::{DateTime, Utc};

/// Set of field edits to apply to a task in one step.
///
/// Fields left unset keep their current value. The title is held raw and
/// only validated when the change set is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: Option<Status>,
}

/// A change set whose title, if any, has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidatedChanges {
    pub(crate) title: Option<TaskTitle>,
    pub(crate) description: Option<String>,
    pub(crate) due_date: Option<DateTime<Utc>>,
    pub(crate) status: Option<Status>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            due_date: None,
            status: None,
        }
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

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns `true` when no field is changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }

    /// Validates the change set without touching any task.
    pub(crate) fn validate(self) -> Result<ValidatedChanges, TaskDomainError> {
        let title = self.title.map(TaskTitle::new).transpose()?;
        Ok(ValidatedChanges {
            title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
        })
    }
}
