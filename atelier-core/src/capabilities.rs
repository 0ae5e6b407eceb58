//! Studio server version gates.
//!
//! The server advertises its build version in a response header; older
//! builds lack the lightweight metadata endpoints some operations rely
//! on, so those operations are gated here once at startup instead of
//! probed at each call site.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionParseError;

/// Parsed `major.minor.patch` studio server version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ServerVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    fn at_least(&self, major: u32, minor: u32, patch: u32) -> bool {
        (self.major, self.minor, self.patch) >= (major, minor, patch)
    }

    /// Plugin saves may fetch remote metadata first (the saver's
    /// conflict-check capability flag).
    pub fn supports_safe_save(&self) -> bool {
        self.at_least(5, 1, 4)
    }

    /// Webapps can be edited through the public API.
    pub fn supports_webapp_editing(&self) -> bool {
        self.at_least(5, 1, 4)
    }

    /// Plugin and library contents can be renamed and moved.
    pub fn supports_content_moves(&self) -> bool {
        self.at_least(11, 1, 0)
    }
}

impl FromStr for ServerVersion {
    type Err = VersionParseError;

    /// Parses dotted version strings; absent components default to zero.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = [0u32; 3];
        for (i, piece) in raw.split('.').take(3).enumerate() {
            parts[i] = piece.parse().map_err(|_| VersionParseError {
                raw: raw.to_string(),
            })?;
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
