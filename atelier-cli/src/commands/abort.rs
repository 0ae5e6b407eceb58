//! `atelier abort` — request cancellation of a recipe's running job.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use atelier_jobs::JobRunner;
use atelier_sync::session::{self, recipe_key};

use crate::context::AppContext;

/// Arguments for `atelier abort`.
#[derive(Args, Debug)]
pub struct AbortArgs {
    pub project_key: String,
    pub recipe: String,

    /// Explicit job id; defaults to the last job `atelier run` started
    /// for this recipe.
    #[arg(long)]
    pub job_id: Option<String>,
}

impl AbortArgs {
    pub async fn run(self) -> Result<()> {
        let ctx = AppContext::load()?;
        let session = session::load_at(&ctx.home)?;
        let key = recipe_key(&self.project_key, &self.recipe);

        let job_id = self
            .job_id
            .or_else(|| session.jobs.get(&key).cloned())
            .context("no job is running for this recipe")?;

        JobRunner::new(ctx.client.clone())
            .abort(&self.project_key, &job_id)
            .await?;
        println!("{} abort requested for job {job_id}", "·".yellow());
        Ok(())
    }
}
