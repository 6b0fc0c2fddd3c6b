//! Shared world state for task tracking BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskwell::task::{
    domain::{Status, Task},
    services::{TaskStore, TaskStoreError},
};

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<DefaultClock>;

/// Scenario world for task tracking behaviour tests.
pub struct TaskTrackingWorld {
    pub store: TestTaskStore,
    pub last_result: Option<Result<(), TaskStoreError>>,
}

impl TaskTrackingWorld {
    /// Creates a world around an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(Arc::new(DefaultClock)),
            last_result: None,
        }
    }

    /// Adds a task and records the outcome.
    pub fn add_task(&mut self, title: &str, days: i64, status: Status) {
        let result = self
            .store
            .add(title, "", reference_date() + Duration::days(days), status)
            .map(|_| ());
        self.last_result = Some(result);
    }

    /// Finds a stored task by title.
    pub fn task_titled(&self, title: &str) -> Result<Task, eyre::Report> {
        self.store
            .list()?
            .into_iter()
            .find(|task| task.title().as_str() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in the store"))
    }
}

impl Default for TaskTrackingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskTrackingWorld {
    TaskTrackingWorld::default()
}

/// Day that relative due dates in scenarios count from.
pub fn reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Parses a status name used in feature files.
pub fn parse_status(raw: &str) -> Result<Status, eyre::Report> {
    Status::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Splits a comma-separated title list from a feature file.
pub fn parse_titles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}
