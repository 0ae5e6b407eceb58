//! Error types for atelier-api.

use thiserror::Error;

use atelier_core::error::{ConfigError, VersionParseError};

/// All errors that can arise from remote API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("studio returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body could not be decoded as the expected shape.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured URL answered but is not a studio server.
    #[error("the configured URL does not point at a studio server (missing version header)")]
    MissingVersionHeader,

    /// The advertised server version could not be parsed.
    #[error(transparent)]
    Version(#[from] VersionParseError),

    /// Instance configuration was missing or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// True for an HTTP 404 — used by the output resolver's
    /// dataset-or-folder fallback.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}
