//! Error types for atelier-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading instance configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error on load — includes the file path for context.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config file exists but names a default instance it does not define.
    #[error("malformed config at {path}: default instance '{instance}' is not defined")]
    UnknownInstance { path: PathBuf, instance: String },

    /// No studio URL in the config file or `ATELIER_URL`.
    #[error("no studio URL has been set up; edit the config file or set ATELIER_URL")]
    NoUrl,

    /// No API key in the config file or `ATELIER_API_KEY`.
    #[error("no API key has been set up; edit the config file or set ATELIER_API_KEY")]
    NoApiKey,

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.atelier/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Error parsing a studio server version string.
#[derive(Debug, Error)]
#[error("invalid server version '{raw}'")]
pub struct VersionParseError {
    pub raw: String,
}
