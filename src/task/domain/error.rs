//! Error types for task domain validation and parsing.

use std::fmt;
use thiserror::Error;

/// Task fields that can be named in validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The display title.
    Title,
    /// The free-form description.
    Description,
    /// The due timestamp.
    DueDate,
    /// The lifecycle status.
    Status,
}

impl TaskField {
    /// Returns the field name as used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DueDate => "due_date",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A field value was rejected at the boundary.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Field that failed validation.
        field: TaskField,
        /// Human-readable explanation suitable for inline display.
        reason: &'static str,
    },
}

impl TaskDomainError {
    /// Builds the error reported for a title that is blank after trimming.
    #[must_use]
    pub const fn empty_title() -> Self {
        Self::Validation {
            field: TaskField::Title,
            reason: "title must not be empty",
        }
    }
}

/// Error returned while parsing statuses from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);
