//! Application services for task tracking.

mod observer;
mod persistence_worker;
mod store;

pub use observer::{ChangeCallback, SubscriptionId};
pub use persistence_worker::PersistenceWorker;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
