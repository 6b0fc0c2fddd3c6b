//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store.

pub mod persistence;

pub use persistence::{TaskPersistence, TaskPersistenceError, TaskPersistenceResult};
