//! Task workflows on top of the store and the recurrence engine.

pub mod error;
pub mod task;
