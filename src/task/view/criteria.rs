//! Filter and sort criteria selected by the user.

use crate::task::domain::{ParseStatusError, Status, Task};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which tasks a projection keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep only tasks whose status equals the given one.
    Only(Status),
}

impl StatusFilter {
    /// Returns `true` when the task passes this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => task.status() == status,
        }
    }

    /// Returns the canonical string form (`all` or a status string).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        Self::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Status::try_from(value).map(Self::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.as_str().to_owned()
    }
}

/// Ordering applied to projected tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Earliest due date first.
    #[default]
    DueDateAscending,
    /// Latest due date first.
    DueDateDescending,
}

impl SortOrder {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueDateAscending => "due_date_ascending",
            Self::DueDateDescending => "due_date_descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = ParseSortOrderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "due_date_ascending" => Ok(Self::DueDateAscending),
            "due_date_descending" => Ok(Self::DueDateDescending),
            _ => Err(ParseSortOrderError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a sort order from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort order: {0}")]
pub struct ParseSortOrderError(pub String);
