//! `atelier run` — build a recipe's output and stream the job log.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tokio_util::sync::CancellationToken;

use atelier_api::recipes;
use atelier_core::model::ActivityState;
use atelier_jobs::JobRunner;
use atelier_sync::session::{self, recipe_key};

use crate::context::AppContext;
use crate::prompts::{StdoutLogSink, TerminalPartitionPrompt};

/// Arguments for `atelier run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    pub project_key: String,
    pub recipe: String,

    /// Partition spec (e.g. `FR|2024-01`). Required outputs prompt when
    /// neither this flag nor a pinned value is available.
    #[arg(long)]
    pub partition: Option<String>,
}

impl RunArgs {
    pub async fn run(self) -> Result<()> {
        let ctx = AppContext::load()?;
        let mut session = session::load_at(&ctx.home)?;
        let key = recipe_key(&self.project_key, &self.recipe);

        let rnp = recipes::fetch(&ctx.client, &self.project_key, &self.recipe)
            .await
            .with_context(|| format!("cannot fetch recipe '{}'", self.recipe))?;

        let known = self
            .partition
            .clone()
            .or_else(|| session.pinned_partitions.get(&key).cloned());

        let runner = JobRunner::new(ctx.client.clone());
        let prompt = TerminalPartitionPrompt::default();
        let job = runner.start(&rnp.recipe, known, &prompt).await?;

        // Remember the job for `atelier abort`, and pin whichever
        // partition ended up used so the next run skips the prompt.
        session.jobs.insert(key.clone(), job.id.clone());
        if let Some(partition) = self.partition.or_else(|| prompt.last_answer()) {
            session.pinned_partitions.insert(key.clone(), partition);
        }
        session::save_at(&ctx.home, &session)?;

        println!("{} job {} started", "▶".cyan(), job.id);

        // Ctrl-c requests a remote abort; the poll loop keeps going
        // until the server reports a terminal state (Aborted included).
        let cancel = CancellationToken::new();
        {
            let runner = JobRunner::new(ctx.client.clone());
            let project_key = self.project_key.clone();
            let job_id = job.id.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    eprintln!("aborting job {job_id}...");
                    if let Err(err) = runner.abort(&project_key, &job_id).await {
                        eprintln!("abort request failed: {err}");
                    }
                }
            });
        }

        let mut sink = StdoutLogSink::default();
        let finished = runner
            .wait(&self.project_key, &job.id, &mut sink, &cancel)
            .await?;

        let state = finished.state();
        match state {
            ActivityState::Done => println!("{} job finished: {state}", "✓".green()),
            ActivityState::Aborted | ActivityState::Skipped => {
                println!("{} job finished: {state}", "·".yellow());
            }
            _ => {
                println!("{} job finished: {state}", "✗".red());
                if let Some(failure) = &finished.base_status.unexpected_failure {
                    println!("  {}: {}", failure.error_type, failure.message);
                    if !failure.detailed_message.is_empty() {
                        println!("  {}", failure.detailed_message);
                    }
                }
            }
        }
        Ok(())
    }
}
