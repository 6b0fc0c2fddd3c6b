//! Derived views over the task list.
//!
//! Everything here is a pure function of its inputs: the same task slice
//! and criteria always give the same projection, and the task slice is never
//! modified. Renderers recompute views after every store change instead of
//! caching them.

mod criteria;
mod progress;
mod projection;

pub use criteria::{ParseSortOrderError, SortOrder, StatusFilter};
pub use progress::{CompletionRatio, StatusCounts, completion_ratio, status_counts};
pub use projection::{TaskView, project};
