//! Shared helpers for task unit tests.

use crate::task::domain::{PersistedTaskData, Status, Task, TaskId, TaskTitle};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Mutex;

/// Clock that advances by one second on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().expect("clock lock");
        let current = *now;
        *now = current + Duration::seconds(1);
        current
    }
}

/// Fixed reference instant used across tests.
pub fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0)
        .single()
        .expect("valid reference date")
}

/// Builds a task directly, bypassing the store.
pub fn task_due(title: &str, due_date: DateTime<Utc>, status: Status) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new(title).expect("valid title"),
        description: String::new(),
        due_date,
        status,
        created_at: base_date(),
        updated_at: base_date(),
    })
}
