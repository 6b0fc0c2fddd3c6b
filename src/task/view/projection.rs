//! Filtered, sorted projection of the task list.

use super::{CompletionRatio, SortOrder, StatusFilter, completion_ratio};
use crate::task::domain::{Task, TaskId};
use std::cmp::Ordering;

/// Computes the ordered ids of the tasks to display.
///
/// Tasks are kept when they match `filter` and are then sorted by due date
/// in the direction given by `sort`. The sort is stable in both directions:
/// tasks sharing a due date keep their order from `tasks`.
#[must_use]
pub fn project(tasks: &[Task], filter: StatusFilter, sort: SortOrder) -> Vec<TaskId> {
    let mut selected: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();
    selected.sort_by(|left, right| compare_due_dates(left, right, sort));
    selected.into_iter().map(Task::id).collect()
}

// `slice::sort_by` is stable; descending order flips the comparison rather
// than reversing the sorted output so ties stay in insertion order.
fn compare_due_dates(left: &Task, right: &Task, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::DueDateAscending => left.due_date().cmp(&right.due_date()),
        SortOrder::DueDateDescending => right.due_date().cmp(&left.due_date()),
    }
}

/// A materialised projection ready for rendering.
///
/// Holds the displayed ids together with the completion ratio of the whole
/// list. Renderers that let users act on rows by position translate those
/// positions with [`TaskView::resolve_indices`] before calling the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    ids: Vec<TaskId>,
    filter: StatusFilter,
    sort: SortOrder,
    completion: CompletionRatio,
}

impl TaskView {
    /// Computes a view over `tasks`.
    #[must_use]
    pub fn compute(tasks: &[Task], filter: StatusFilter, sort: SortOrder) -> Self {
        Self {
            ids: project(tasks, filter, sort),
            filter,
            sort,
            completion: completion_ratio(tasks),
        }
    }

    /// Returns the displayed ids in display order.
    #[must_use]
    pub fn ids(&self) -> &[TaskId] {
        &self.ids
    }

    /// Returns the filter this view was computed with.
    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Returns the sort order this view was computed with.
    #[must_use]
    pub const fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Returns the completion ratio across all tasks, not just displayed ones.
    #[must_use]
    pub const fn completion(&self) -> CompletionRatio {
        self.completion
    }

    /// Returns the number of displayed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the id displayed at `index`, if any.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.ids.get(index).copied()
    }

    /// Translates displayed row positions into task ids.
    ///
    /// Out-of-range positions are skipped.
    #[must_use]
    pub fn resolve_indices(&self, indices: impl IntoIterator<Item = usize>) -> Vec<TaskId> {
        indices
            .into_iter()
            .filter_map(|index| self.id_at(index))
            .collect()
    }
}
