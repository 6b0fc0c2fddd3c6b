//! Taskwell: personal task-tracking core.
//!
//! This crate provides the task data model, an authoritative task store with
//! change notification, and the filtered, sorted views and progress figures
//! a user interface renders. Rendering itself is left to callers.
//!
//! # Architecture
//!
//! Taskwell follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, JSON file)
//!
//! # Modules
//!
//! - [`task`]: Task model, store, persistence, and views
//! - [`config`]: Storage and initial view configuration
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::{Duration, Utc};
//! use mockable::DefaultClock;
//! use taskwell::task::{
//!     domain::Status,
//!     services::TaskStore,
//!     view::{SortOrder, StatusFilter},
//! };
//!
//! let store = TaskStore::new(Arc::new(DefaultClock));
//! let now = Utc::now();
//! let later = store.add("Write report", "", now + Duration::days(2), Status::NotStarted)?;
//! let sooner = store.add("  Buy milk  ", "", now, Status::InProgress)?;
//! assert_eq!(sooner.title().as_str(), "Buy milk");
//!
//! let view = store.view(StatusFilter::All, SortOrder::DueDateAscending)?;
//! assert_eq!(view.ids(), &[sooner.id(), later.id()]);
//! # Ok::<(), taskwell::task::services::TaskStoreError>(())
//! ```

pub mod config;
pub mod task;
