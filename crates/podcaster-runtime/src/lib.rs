//! Serverless runtime around the podcast handler
//!
//! Three ways to feed events to the [`RequestHandler`]: the job polling
//! [`Worker`], the local HTTP [`Server`], and [`run_once`] for a single test
//! event.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod api;
mod error;
mod job;
mod runner;
mod worker;

use std::sync::Arc;

use anyhow::Context;
use podcaster_config::Config;
use podcaster_core::{AudioWriter, RequestHandler, SpeechSynthesizer};

pub use api::{Server, router, status_code};
pub use error::{Result, RuntimeError};
pub use job::{Job, JobClient, JobResult};
pub use runner::JobRunner;
pub use worker::Worker;

/// Build the handler and its collaborators from configuration
pub fn build_handler(config: &Config) -> anyhow::Result<RequestHandler> {
    let synthesizer = tts::build_synthesizer(&config.tts)?;
    let (storage, table) =
        podcaster_supabase::from_config(config).context("failed to build Supabase client")?;

    tracing::debug!(
        synthesizer = synthesizer.name(),
        bucket = storage.bucket(),
        artifact_dir = %config.artifacts.dir.display(),
        "handler initialized"
    );

    Ok(RequestHandler::new(
        synthesizer,
        AudioWriter::new(config.artifacts.dir.clone()),
        Arc::new(storage),
        Arc::new(table),
    )
    .keep_artifacts(config.artifacts.keep))
}

/// Run a single event given as JSON text and return the podcast identifier
pub async fn run_once(runner: &JobRunner, event: &str) -> anyhow::Result<String> {
    let event: serde_json::Value = serde_json::from_str(event).context("test input is not valid JSON")?;

    Ok(runner.run(&event).await?)
}
