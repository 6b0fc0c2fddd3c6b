//! Step definitions for task tracking behaviour tests.

pub mod given;
pub mod when;
pub mod world;
