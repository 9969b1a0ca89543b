//! Bridge between the UI thread and the tokio runtime that runs background work.

pub mod commands;
pub mod runtime;
