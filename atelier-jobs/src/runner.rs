//! The job runner: submit, poll, stream, abort.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use atelier_api::{jobs, outputs, Client};
use atelier_core::model::{BuildRequest, Job, JobRef, Recipe};

use crate::error::JobError;

/// How long the poll loop sleeps between status fetches.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Asks the user for a partition spec. The placeholder is the required
/// dimension names joined by `|`. `None` (or an empty answer) means the
/// prompt was cancelled.
#[async_trait]
pub trait PartitionPrompt: Send + Sync {
    async fn request(&self, placeholder: &str) -> Option<String>;
}

/// Receives the job log on each poll tick. Content is the full log each
/// time; sinks replace, they do not append.
pub trait LogSink: Send {
    fn replace(&mut self, content: &str);
}

/// Drives one recipe build from submission to a terminal state.
pub struct JobRunner {
    client: Client,
    poll_interval: Duration,
}

impl JobRunner {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Tests shrink the cadence; production keeps the default.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Resolve the output, settle the partition, submit the build.
    ///
    /// Fails before any job exists when the recipe has no outputs or a
    /// required partition is not given — the submission endpoint is
    /// never reached in either case.
    pub async fn start(
        &self,
        recipe: &Recipe,
        known_partition: Option<String>,
        prompt: &dyn PartitionPrompt,
    ) -> Result<JobRef, JobError> {
        let output = outputs::buildable_for(&self.client, recipe)
            .await?
            .ok_or_else(|| JobError::NoOutputs {
                name: recipe.name.clone(),
            })?;

        let partition = if output.is_partitioned() {
            let pinned = known_partition.filter(|value| !value.is_empty());
            let value = match pinned {
                Some(value) => value,
                None => {
                    let placeholder = output.dimension_names().join("|");
                    prompt
                        .request(&placeholder)
                        .await
                        .filter(|value| !value.is_empty())
                        .ok_or(JobError::NoPartition)?
                }
            };
            Some(value)
        } else {
            None
        };

        let request = BuildRequest::forced_build(&output.reference, output.kind, partition);
        let job = jobs::submit(&self.client, &recipe.project_key, &request).await?;
        tracing::info!(job_id = %job.id, recipe = %recipe.name, "build submitted");
        Ok(job)
    }

    /// Poll until the job reaches a terminal state, flushing the log
    /// after every status fetch (the final one included). No iteration
    /// bound — only a terminal state or the cancellation token ends the
    /// loop. The token is checked before each sleep and before the
    /// final log flush.
    pub async fn wait(
        &self,
        project_key: &str,
        job_id: &str,
        sink: &mut dyn LogSink,
        cancel: &CancellationToken,
    ) -> Result<Job, JobError> {
        let mut job = jobs::fetch(&self.client, project_key, job_id).await?;
        while job.state().is_active() {
            if cancel.is_cancelled() {
                return Err(JobError::Cancelled);
            }
            self.flush_log(project_key, job_id, sink).await;
            tokio::select! {
                _ = cancel.cancelled() => return Err(JobError::Cancelled),
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
            job = jobs::fetch(&self.client, project_key, job_id).await?;
        }

        if cancel.is_cancelled() {
            return Err(JobError::Cancelled);
        }
        // One last flush to catch trailing output.
        self.flush_log(project_key, job_id, sink).await;
        Ok(job)
    }

    /// [`start`](Self::start) then [`wait`](Self::wait).
    pub async fn run(
        &self,
        recipe: &Recipe,
        known_partition: Option<String>,
        prompt: &dyn PartitionPrompt,
        sink: &mut dyn LogSink,
        cancel: &CancellationToken,
    ) -> Result<Job, JobError> {
        let job = self.start(recipe, known_partition, prompt).await?;
        self.wait(&recipe.project_key, &job.id, sink, cancel).await
    }

    /// Request remote cancellation. Does not wait for `Aborted`.
    pub async fn abort(&self, project_key: &str, job_id: &str) -> Result<(), JobError> {
        jobs::abort(&self.client, project_key, job_id).await?;
        Ok(())
    }

    /// A failed log fetch must not kill the poll loop; status polling
    /// carries on and the next tick retries naturally.
    async fn flush_log(&self, project_key: &str, job_id: &str, sink: &mut dyn LogSink) {
        match jobs::log(&self.client, project_key, job_id).await {
            Ok(content) => sink.replace(&content),
            Err(err) => {
                tracing::warn!(error = %err, job_id, "job log fetch failed; still polling");
            }
        }
    }
}
