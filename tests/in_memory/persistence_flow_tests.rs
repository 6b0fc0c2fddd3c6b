//! In-memory integration tests for restarting a store from saved state.

use super::helpers::{clock, due_in};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use taskwell::task::{
    adapters::memory::InMemoryTaskPersistence,
    domain::{Status, TaskChanges},
    services::TaskStore,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopened_store_sees_previous_session(clock: Arc<DefaultClock>) {
    let backend = InMemoryTaskPersistence::new();

    let (first_session, worker) = TaskStore::open(Arc::new(backend.clone()), Arc::clone(&clock))
        .await
        .expect("open should succeed");
    let task = first_session
        .add("Carry over", "from yesterday", due_in(1), Status::NotStarted)
        .expect("add should succeed");
    first_session
        .update(task.id(), TaskChanges::new().with_status(Status::InProgress))
        .expect("update should succeed");
    drop(first_session);
    worker.join().await.expect("worker should exit cleanly");

    let (second_session, second_worker) = TaskStore::open(Arc::new(backend), clock)
        .await
        .expect("reopen should succeed");
    let restored = second_session
        .get(task.id())
        .expect("get should succeed")
        .expect("task should be restored");

    assert_eq!(restored.title().as_str(), "Carry over");
    assert_eq!(restored.description(), "from yesterday");
    assert_eq!(restored.status(), Status::InProgress);
    drop(second_session);
    second_worker.join().await.expect("worker should exit cleanly");
}
