//! In-memory persistence backend for tests and embedders.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskPersistence, TaskPersistenceError, TaskPersistenceResult},
};

/// Thread-safe in-memory task persistence.
///
/// Clones share the same storage, so a test can keep one handle while the
/// store's persistence worker writes through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskPersistence {
    state: Arc<RwLock<InMemoryPersistenceState>>,
}

#[derive(Debug, Default)]
struct InMemoryPersistenceState {
    tasks: Vec<Task>,
    save_count: usize,
}

impl InMemoryTaskPersistence {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that loads `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryPersistenceState {
                tasks,
                save_count: 0,
            })),
        }
    }

    /// Returns the most recently saved collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tasks
            .clone()
    }

    /// Returns how many saves have completed.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .save_count
    }
}

#[async_trait]
impl TaskPersistence for InMemoryTaskPersistence {
    async fn load(&self) -> TaskPersistenceResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskPersistenceError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.clone())
    }

    async fn save(&self, tasks: &[Task]) -> TaskPersistenceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskPersistenceError::storage(std::io::Error::other(err.to_string()))
        })?;
        state.tasks = tasks.to_vec();
        state.save_count += 1;
        Ok(())
    }
}
