//! Instance configuration.
//!
//! # Storage layout
//!
//! ```text
//! ~/.atelier/
//!   config.json     (named instances + default instance pointer)
//! ```
//!
//! The file may name several studio instances; operations always use the
//! default one. A URL or API key missing from the file falls back to the
//! `ATELIER_URL` / `ATELIER_API_KEY` environment variables. Missing both
//! is a fatal [`ConfigError`] — remote operations never retry config.
//!
//! # API pattern
//!
//! Every loader has two forms:
//! - `fn_at(home: &Path)` — explicit home; used in tests with `TempDir`
//! - `fn()` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One named studio instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InstanceConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    /// Skip TLS certificate verification when talking to this instance.
    #[serde(default)]
    pub no_verify_tls: bool,
}

/// On-disk config document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub instances: HashMap<String, InstanceConfig>,
    #[serde(default = "default_instance_name")]
    pub default_instance: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            instances: HashMap::new(),
            default_instance: default_instance_name(),
        }
    }
}

fn default_instance_name() -> String {
    "default".to_string()
}

/// `<home>/.atelier/config.json` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".atelier").join("config.json")
}

/// Load and resolve the default instance, rooted at `home`.
///
/// Returns [`ConfigError::NoUrl`] / [`ConfigError::NoApiKey`] when neither
/// the file nor the environment provides the value.
pub fn load_at(home: &Path) -> Result<InstanceConfig, ConfigError> {
    let file = read_file_at(home)?;
    resolve(
        file,
        config_path_at(home),
        std::env::var("ATELIER_URL").ok(),
        std::env::var("ATELIER_API_KEY").ok(),
    )
}

/// `load_at` convenience wrapper — uses `dirs::home_dir()`.
pub fn load() -> Result<InstanceConfig, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
    load_at(&home)
}

fn read_file_at(home: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)?;
    let file =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;
    Ok(Some(file))
}

/// Pure resolution: file values win; the environment fills gaps.
fn resolve(
    file: Option<ConfigFile>,
    path: PathBuf,
    env_url: Option<String>,
    env_key: Option<String>,
) -> Result<InstanceConfig, ConfigError> {
    let mut instance = match file {
        Some(mut file) => {
            let name = file.default_instance.clone();
            file.instances
                .remove(&name)
                .ok_or(ConfigError::UnknownInstance {
                    path,
                    instance: name,
                })?
        }
        None => InstanceConfig::default(),
    };

    if instance.url.is_empty() {
        instance.url = env_url.unwrap_or_default();
    }
    if instance.api_key.is_empty() {
        instance.api_key = env_key.unwrap_or_default();
    }

    if instance.url.is_empty() {
        return Err(ConfigError::NoUrl);
    }
    if instance.api_key.is_empty() {
        return Err(ConfigError::NoApiKey);
    }
    Ok(instance)
}
