use std::time::Duration;

use podcaster_config::RuntimeConfig;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::job::{Job, JobClient, JobResult};
use crate::runner::JobRunner;

/// Polls the job endpoint and runs each job through the handler
///
/// Every loop processes one job at a time; `concurrency` loops share the
/// same handler.
#[derive(Debug, Clone)]
pub struct Worker {
    client: JobClient,
    runner: JobRunner,
    worker_id: String,
    poll_interval: Duration,
    concurrency: usize,
}

impl Worker {
    /// Build a worker from the runtime configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the job endpoints are not configured
    pub fn new(config: &RuntimeConfig, runner: JobRunner) -> Result<Self> {
        Ok(Self {
            client: JobClient::new(config)?,
            runner,
            worker_id: config.worker_id.clone(),
            poll_interval: config.poll_interval,
            concurrency: config.concurrency.max(1),
        })
    }

    /// Run the polling loops until `shutdown` is cancelled
    ///
    /// A job that is already running is finished and its result posted
    /// before the loop exits.
    pub async fn run(self, shutdown: CancellationToken) {
        tracing::info!(
            worker_id = %self.worker_id,
            concurrency = self.concurrency,
            "worker started"
        );

        let mut loops = JoinSet::new();
        for index in 0..self.concurrency {
            loops.spawn(self.clone().poll_loop(index, shutdown.clone()));
        }

        while let Some(joined) = loops.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "worker loop terminated abnormally");
            }
        }

        tracing::info!(worker_id = %self.worker_id, "worker stopped");
    }

    async fn poll_loop(self, index: usize, shutdown: CancellationToken) {
        loop {
            let next = tokio::select! {
                () = shutdown.cancelled() => break,
                next = self.client.next_job(&self.worker_id) => next,
            };

            match next {
                Ok(Some(job)) => {
                    self.process(&job).await;
                    continue;
                }
                Ok(None) => tracing::trace!(worker = index, "no job available"),
                Err(e) => tracing::warn!(worker = index, error = %e, "failed to fetch job"),
            }

            tokio::select! {
                () = shutdown.cancelled() => break,
                () = tokio::time::sleep(self.poll_interval) => {}
            }
        }
    }

    /// Run one job and post its result
    pub async fn process(&self, job: &Job) -> JobResult {
        tracing::info!(job_id = %job.id, "job received");

        let result = match self.runner.run(&job.event()).await {
            Ok(podcast_id) => JobResult::Output(podcast_id),
            Err(e) => JobResult::Error(e.to_string()),
        };

        if let Err(e) = self.client.post_result(&job.id, &result).await {
            tracing::error!(job_id = %job.id, error = %e, "failed to post job result");
        }

        result
    }
}
