//! Task entity.

use super::{Status, TaskChanges, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A tracked task.
///
/// The identifier is fixed at creation; every other field can be edited in
/// place through [`Task::apply`] and [`Task::set_status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    due_date: DateTime<Utc>,
    status: Status,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted status.
    pub status: Status,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: impl Into<String>,
        due_date: DateTime<Utc>,
        status: Status,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description: description.into(),
            due_date,
            status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
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

    /// Returns the description, which may be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
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

    /// Applies a change set in place.
    ///
    /// Validation happens before any field is written, so a rejected change
    /// set leaves the task untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Validation`] when a new title is blank
    /// after trimming.
    pub fn apply(
        &mut self,
        changes: TaskChanges,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let validated = changes.validate()?;
        if let Some(title) = validated.title {
            self.title = title;
        }
        if let Some(description) = validated.description {
            self.description = description;
        }
        if let Some(due_date) = validated.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = validated.status {
            self.status = status;
        }
        self.touch(clock);
        Ok(())
    }

    /// Replaces the lifecycle status.
    pub fn set_status(&mut self, status: Status, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
