//! Aggregate progress figures.

use crate::task::domain::{Status, Task};
use std::fmt;

/// Exact share of completed tasks.
///
/// The ratio is kept as a pair of counts; an empty list has ratio zero.
/// Equality compares the rationals, so `1/4 == 2/8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionRatio {
    completed: usize,
    total: usize,
}

impl CompletionRatio {
    /// Creates a ratio from counts.
    ///
    /// `completed` is clamped to `total`.
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed: completed.min(total),
            total,
        }
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed(self) -> usize {
        self.completed
    }

    /// Returns the number of tasks considered.
    #[must_use]
    pub const fn total(self) -> usize {
        self.total
    }

    /// Returns the ratio as a value in `[0, 1]`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "progress is rendered as a fraction; task counts stay far below 2^52"
    )]
    pub fn as_f64(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    // Empty lists normalise to 0/1 so they compare equal to every zero ratio.
    fn normalized(self) -> (u128, u128) {
        if self.total == 0 {
            return (0, 1);
        }
        (self.completed as u128, self.total as u128)
    }
}

impl PartialEq for CompletionRatio {
    fn eq(&self, other: &Self) -> bool {
        let (lhs_num, lhs_den) = self.normalized();
        let (rhs_num, rhs_den) = other.normalized();
        lhs_num * rhs_den == rhs_num * lhs_den
    }
}

impl Eq for CompletionRatio {}

impl fmt::Display for CompletionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

/// Computes the share of completed tasks.
#[must_use]
pub fn completion_ratio(tasks: &[Task]) -> CompletionRatio {
    let completed = tasks
        .iter()
        .filter(|task| task.status().is_completed())
        .count();
    CompletionRatio::new(completed, tasks.len())
}

/// Per-status task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Tasks not yet started.
    pub not_started: usize,
    /// Tasks in progress.
    pub in_progress: usize,
    /// Completed tasks.
    pub completed: usize,
}

impl StatusCounts {
    /// Returns the count for one status.
    #[must_use]
    pub const fn get(self, status: Status) -> usize {
        match status {
            Status::NotStarted => self.not_started,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }

    /// Returns the total number of tasks counted.
    #[must_use]
    pub const fn total(self) -> usize {
        self.not_started + self.in_progress + self.completed
    }
}

/// Counts tasks by status.
#[must_use]
pub fn status_counts(tasks: &[Task]) -> StatusCounts {
    tasks
        .iter()
        .fold(StatusCounts::default(), |mut counts, task| {
            match task.status() {
                Status::NotStarted => counts.not_started += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Completed => counts.completed += 1,
            }
            counts
        })
}
