//! Server discovery — build version plus the editable plugin list.

use atelier_core::capabilities::ServerVersion;
use atelier_core::model::Plugin;

use crate::{ApiError, Client};

/// Response header carrying the studio build version.
pub const VERSION_HEADER: &str = "x-studio-version";

#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub version: ServerVersion,
    /// Dev plugins only — released plugins are read-only.
    pub dev_plugins: Vec<Plugin>,
}

/// Probe the instance: one GET against the plugin listing yields both
/// the version header and the plugin list. A missing header means the
/// URL does not point at a studio server.
pub async fn discover(client: &Client) -> Result<ServerInfo, ApiError> {
    let (plugins, version): (Vec<Plugin>, _) = client
        .get_json_with_header("/plugins/", VERSION_HEADER)
        .await?;
    let raw = version.ok_or(ApiError::MissingVersionHeader)?;
    Ok(ServerInfo {
        version: raw.parse()?,
        dev_plugins: plugins.into_iter().filter(|p| p.is_dev).collect(),
    })
}
