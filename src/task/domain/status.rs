//! Task lifecycle status and its presentation metadata.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a tracked task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Work on the task has not begun.
    #[default]
    NotStarted,
    /// The task is being worked on.
    InProgress,
    /// The task is finished.
    Completed,
}

/// Static display metadata attached to a [`Status`].
///
/// The keys are symbolic; renderers map them onto their own palettes and
/// icon sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    /// Human-readable label.
    pub label: &'static str,
    /// Symbolic color key.
    pub color_key: &'static str,
    /// Symbolic icon key.
    pub icon_key: &'static str,
}

const NOT_STARTED: StatusPresentation = StatusPresentation {
    label: "Not Started",
    color_key: "gray",
    icon_key: "circle",
};

const IN_PROGRESS: StatusPresentation = StatusPresentation {
    label: "In Progress",
    color_key: "blue",
    icon_key: "clock",
};

const COMPLETED: StatusPresentation = StatusPresentation {
    label: "Completed",
    color_key: "green",
    icon_key: "checkmark.circle",
};

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the presentation metadata for this status.
    #[must_use]
    pub const fn presentation(self) -> &'static StatusPresentation {
        match self {
            Self::NotStarted => &NOT_STARTED,
            Self::InProgress => &IN_PROGRESS,
            Self::Completed => &COMPLETED,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.presentation().label
    }

    /// Returns the symbolic color key.
    #[must_use]
    pub const fn color_key(self) -> &'static str {
        self.presentation().color_key
    }

    /// Returns the symbolic icon key.
    #[must_use]
    pub const fn icon_key(self) -> &'static str {
        self.presentation().icon_key
    }

    /// Returns the status that follows this one, wrapping from
    /// [`Status::Completed`] back to [`Status::NotStarted`].
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }

    /// Returns `true` for [`Status::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}
