//! Background worker writing store snapshots to a persistence backend.

use crate::task::{
    domain::Task,
    ports::{TaskPersistence, TaskPersistenceError, TaskPersistenceResult},
};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Sending half held by the store.
#[derive(Debug)]
pub(crate) struct PersistenceHandle {
    sender: UnboundedSender<Vec<Task>>,
}

impl PersistenceHandle {
    /// Queues a snapshot without waiting for it to be written.
    pub(crate) fn submit(&self, snapshot: Vec<Task>) {
        let task_count = snapshot.len();
        if self.sender.send(snapshot).is_err() {
            tracing::warn!(task_count, "persistence worker has stopped, snapshot dropped");
        }
    }
}

/// Running persistence worker.
///
/// The worker exits once every clone of the owning store has been dropped
/// and the last queued snapshot has been written.
#[derive(Debug)]
#[must_use = "dropping the worker detaches it; call `join` to wait for the final save"]
pub struct PersistenceWorker {
    handle: JoinHandle<()>,
}

impl PersistenceWorker {
    /// Waits for the worker to flush and exit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Storage`] when the worker task
    /// panicked or was cancelled.
    pub async fn join(self) -> TaskPersistenceResult<()> {
        self.handle.await.map_err(TaskPersistenceError::storage)
    }
}

/// Spawns the worker on the current tokio runtime.
pub(crate) fn spawn<P>(persistence: Arc<P>) -> (PersistenceHandle, PersistenceWorker)
where
    P: TaskPersistence + 'static,
{
    let (sender, receiver) = mpsc::unbounded_channel();
    let handle = tokio::spawn(run(persistence, receiver));
    (PersistenceHandle { sender }, PersistenceWorker { handle })
}

async fn run<P>(persistence: Arc<P>, mut receiver: UnboundedReceiver<Vec<Task>>)
where
    P: TaskPersistence + 'static,
{
    while let Some(mut snapshot) = receiver.recv().await {
        // Only the newest queued snapshot matters; older ones are superseded.
        while let Ok(newer) = receiver.try_recv() {
            snapshot = newer;
        }
        match persistence.save(&snapshot).await {
            Ok(()) => tracing::debug!(task_count = snapshot.len(), "persisted task snapshot"),
            Err(err) => tracing::warn!(
                error = %err,
                task_count = snapshot.len(),
                "failed to persist task snapshot"
            ),
        }
    }
    tracing::debug!("persistence worker stopped");
}
