//! Unit tests for task tracking.

mod support;
