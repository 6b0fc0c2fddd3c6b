//! In-memory integration tests for task creation, editing, and deletion.

use super::helpers::{TestStore, due_in, store};
use rstest::rstest;
use std::sync::{Arc, Mutex};
use taskwell::task::{
    domain::{Status, TaskChanges, TaskId},
    services::TaskStoreError,
    view::{CompletionRatio, SortOrder, StatusFilter},
};

#[rstest]
fn filtered_view_tracks_status_changes(store: TestStore) {
    let write = store
        .add("Write report", "", due_in(2), Status::NotStarted)
        .expect("add should succeed");
    let review = store
        .add("Review draft", "", due_in(1), Status::InProgress)
        .expect("add should succeed");

    let in_progress = store
        .view(StatusFilter::Only(Status::InProgress), SortOrder::DueDateAscending)
        .expect("view should succeed");
    assert_eq!(in_progress.ids(), &[review.id()]);

    store
        .set_status(write.id(), Status::InProgress)
        .expect("set_status should succeed");
    let refreshed = store
        .view(StatusFilter::Only(Status::InProgress), SortOrder::DueDateAscending)
        .expect("view should succeed");
    assert_eq!(refreshed.ids(), &[review.id(), write.id()]);
}

#[rstest]
fn observer_recomputes_view_after_every_change(store: TestStore) {
    let rendered: Arc<Mutex<Vec<Vec<TaskId>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&rendered);
    let reader = store.clone();
    store.on_change(move || {
        if let Ok(view) = reader.view(StatusFilter::All, SortOrder::DueDateDescending) {
            if let Ok(mut frames) = sink.lock() {
                frames.push(view.ids().to_vec());
            }
        }
    });

    let early = store
        .add("Early", "", due_in(0), Status::NotStarted)
        .expect("add should succeed");
    let late = store
        .add("Late", "", due_in(5), Status::NotStarted)
        .expect("add should succeed");
    store.remove([early.id()]).expect("remove should succeed");
    store.close();
    store
        .add("Unseen", "", due_in(3), Status::NotStarted)
        .expect("add should succeed");

    let frames = rendered.lock().expect("frames lock").clone();
    assert_eq!(
        frames,
        vec![
            vec![early.id()],
            vec![late.id(), early.id()],
            vec![late.id()],
        ]
    );
}

#[rstest]
fn editing_a_removed_task_reports_not_found(store: TestStore) {
    let task = store
        .add("Ephemeral", "", due_in(0), Status::NotStarted)
        .expect("add should succeed");
    store.remove([task.id()]).expect("remove should succeed");

    let result = store.update(task.id(), TaskChanges::new().with_description("late edit"));

    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == task.id()));
}

#[rstest]
fn removing_rows_from_a_filtered_view_deletes_the_displayed_tasks(store: TestStore) {
    let groceries = store
        .add("Groceries", "", due_in(3), Status::Completed)
        .expect("add should succeed");
    let taxes = store
        .add("Taxes", "", due_in(1), Status::NotStarted)
        .expect("add should succeed");
    let laundry = store
        .add("Laundry", "", due_in(2), Status::Completed)
        .expect("add should succeed");

    let completed = store
        .view(StatusFilter::Only(Status::Completed), SortOrder::DueDateAscending)
        .expect("view should succeed");
    // Row 0 of the completed view is Laundry, even though it sits third in
    // the store.
    let targets = completed.resolve_indices([0]);
    store.remove(targets).expect("remove should succeed");

    let remaining: Vec<TaskId> = store
        .list()
        .expect("list should succeed")
        .iter()
        .map(|task| task.id())
        .collect();
    assert_eq!(remaining, vec![groceries.id(), taxes.id()]);
    assert!(store.get(laundry.id()).expect("get should succeed").is_none());
}

#[rstest]
fn completion_ratio_follows_the_whole_list(store: TestStore) {
    for (title, status) in [
        ("one", Status::Completed),
        ("two", Status::NotStarted),
        ("three", Status::InProgress),
        ("four", Status::NotStarted),
    ] {
        store
            .add(title, "", due_in(0), status)
            .expect("add should succeed");
    }

    let filtered = store
        .view(StatusFilter::Only(Status::NotStarted), SortOrder::DueDateAscending)
        .expect("view should succeed");

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered.completion(), CompletionRatio::new(1, 4));
    assert!((filtered.completion().as_f64() - 0.25).abs() < f64::EPSILON);
}
