//! Error types for atelier-jobs.

use thiserror::Error;

use atelier_api::ApiError;

/// All errors that can arise while starting or tracking a job.
#[derive(Debug, Error)]
pub enum JobError {
    /// A remote call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The recipe declares no outputs; there is nothing to build.
    #[error("recipe {name} can not be run: it has no outputs")]
    NoOutputs { name: String },

    /// The output is partitioned and the prompt was cancelled or empty.
    #[error("no partition given: job not started")]
    NoPartition,

    /// The poll loop's cancellation token fired.
    #[error("job polling cancelled")]
    Cancelled,
}
