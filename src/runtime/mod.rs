//! Runtime module
//!
//! Provides the task handle returned by GitHub operations.

pub mod async_task;

pub use async_task::{AsyncTask, TaskDropped};
