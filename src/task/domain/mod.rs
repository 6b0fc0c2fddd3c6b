//! Domain model for task tracking.
//!
//! The domain holds the task entity, its status, and the validated scalar
//! types guarding the entity's invariants. It has no knowledge of storage,
//! observers, or presentation.

mod changes;
mod error;
mod ids;
mod status;
mod task;
mod title;

pub use changes::TaskChanges;
pub use error::{ParseStatusError, TaskDomainError, TaskField};
pub use ids::TaskId;
pub use status::{Status, StatusPresentation};
pub use task::{PersistedTaskData, Task};
pub use title::TaskTitle;
