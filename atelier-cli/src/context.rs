//! Shared command setup: config, client, staging cache.

use std::path::PathBuf;

use anyhow::{Context, Result};

use atelier_api::Client;
use atelier_core::config;
use atelier_sync::StagingCache;

/// Everything a command needs to talk to the studio and the local
/// staging tree.
pub struct AppContext {
    pub home: PathBuf,
    pub client: Client,
    pub cache: StagingCache,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        let instance = config::load_at(&home)?;
        let client = Client::from_config(&instance)?;
        let cache = StagingCache::new(home.join(".atelier").join("staging"));
        Ok(Self {
            home,
            client,
            cache,
        })
    }
}
