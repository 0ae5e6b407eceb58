//! Error types for atelier-sync.

use std::path::PathBuf;

use thiserror::Error;

use atelier_api::ApiError;

/// All errors that can arise from staging and saving.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A remote call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error (session table).
    #[error("session JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory creation walked above the filesystem root — the staging
    /// root is misconfigured.
    #[error("unable to create directory {path}: no existing ancestor")]
    NoAncestor { path: PathBuf },

    /// The user cancelled the save; the document stays dirty.
    #[error("save cancelled")]
    Cancelled,

    /// No open document is recorded for a staged path.
    #[error("no open document at {path}")]
    NotOpen { path: PathBuf },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
