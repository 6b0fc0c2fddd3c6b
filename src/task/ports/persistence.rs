//! Persistence port for loading and saving the task collection.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task persistence operations.
pub type TaskPersistenceResult<T> = Result<T, TaskPersistenceError>;

/// Whole-collection persistence contract.
///
/// The store loads once when it opens and afterwards hands every committed
/// snapshot to [`TaskPersistence::save`] from a background worker. Saves
/// are best-effort: a failed save is logged and never undoes the in-memory
/// change that produced the snapshot.
#[async_trait]
pub trait TaskPersistence: Send + Sync {
    /// Loads the persisted collection in insertion order.
    ///
    /// Returns an empty list when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError`] when the backing storage cannot be
    /// read or decoded.
    async fn load(&self) -> TaskPersistenceResult<Vec<Task>>;

    /// Replaces the persisted collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError`] when the snapshot cannot be encoded
    /// or written.
    async fn save(&self, tasks: &[Task]) -> TaskPersistenceResult<()>;
}

/// Errors returned by task persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskPersistenceError {
    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskPersistenceError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

impl From<serde_json::Error> for TaskPersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}

impl From<std::io::Error> for TaskPersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err)
    }
}
