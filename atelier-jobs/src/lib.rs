//! # atelier-jobs
//!
//! Runs a recipe's build remotely and tracks it to completion: resolve
//! the output to build, resolve a partition when one is required, submit
//! the job, then poll status on a fixed cadence while streaming the log.
//! Abort is a separate fire-and-forget request — a concurrent poll loop
//! observes the `Aborted` state on its own cadence.

pub mod error;
pub mod runner;

pub use error::JobError;
pub use runner::{JobRunner, LogSink, PartitionPrompt, DEFAULT_POLL_INTERVAL};
