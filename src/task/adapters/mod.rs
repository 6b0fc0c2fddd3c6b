//! Adapter implementations for task tracking ports.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileTaskPersistence;
pub use memory::InMemoryTaskPersistence;
