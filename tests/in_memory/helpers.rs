//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use taskwell::task::services::TaskStore;

/// Store type used across in-memory integration tests.
pub type TestStore = TaskStore<DefaultClock>;

/// Provides a fresh store without persistence.
#[fixture]
pub fn store() -> TestStore {
    TaskStore::new(Arc::new(DefaultClock))
}

/// Provides a clock for store creation.
#[fixture]
pub fn clock() -> Arc<DefaultClock> {
    Arc::new(DefaultClock)
}

/// Returns a due date `days` after a fixed reference day.
#[must_use]
pub fn due_in(days: i64) -> DateTime<Utc> {
    let reference = Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_default();
    reference + chrono::Duration::days(days)
}
