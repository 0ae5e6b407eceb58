//! `atelier clean` — teardown: purge the staging cache and the session.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use atelier_sync::session;

use crate::context::AppContext;

/// Arguments for `atelier clean`.
#[derive(Args, Debug)]
pub struct CleanArgs {}

impl CleanArgs {
    pub fn run(self) -> Result<()> {
        let ctx = AppContext::load()?;
        ctx.cache.purge_all()?;
        session::clear_at(&ctx.home)?;
        println!("{} staging cache purged", "✓".green());
        Ok(())
    }
}
