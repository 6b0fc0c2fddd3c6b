//! Task tracking for Taskwell.
//!
//! This module holds the task data model, the store that owns the task
//! collection, and the derived views renderers display. Presentation layers
//! sit outside it: they read views, subscribe to store changes, and forward
//! user intents as store calls keyed by task id. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store and its collaborators in [`services`]
//! - Pure projections in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
