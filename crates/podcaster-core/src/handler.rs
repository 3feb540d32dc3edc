use std::sync::Arc;

use serde_json::Value;
use tracing::Instrument;

use crate::{
    capability::{SpeechSynthesizer, StatusUpdater, StorageUploader},
    error::{PodcastError, Result},
    request::PodcastRequest,
    stage::Stage,
    writer::AudioWriter,
};

/// Runs one podcast request through validate → synthesize → write → upload →
/// mark ready
///
/// The handler holds only shared, immutable collaborators, so one instance
/// serves every invocation of the process. There is no retry and no rollback:
/// the first failing stage ends the request and whatever earlier stages
/// produced is left in place.
pub struct RequestHandler {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    writer: AudioWriter,
    uploader: Arc<dyn StorageUploader>,
    status: Arc<dyn StatusUpdater>,
    keep_artifacts: bool,
}

impl RequestHandler {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        writer: AudioWriter,
        uploader: Arc<dyn StorageUploader>,
        status: Arc<dyn StatusUpdater>,
    ) -> Self {
        Self {
            synthesizer,
            writer,
            uploader,
            status,
            keep_artifacts: false,
        }
    }

    /// Keep the local artifact after a successful request
    #[must_use]
    pub const fn keep_artifacts(mut self, keep: bool) -> Self {
        self.keep_artifacts = keep;
        self
    }

    /// Handle a runtime event of the form `{"input": {"podcast_id", "podcast_script"}}`
    ///
    /// Returns the podcast identifier once its record is marked ready.
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that failed
    pub async fn handle(&self, event: &Value) -> Result<String> {
        let span = tracing::info_span!("podcast_job", podcast_id = tracing::field::Empty);

        async move {
            tracing::info!("starting new podcast generation request");

            let request = PodcastRequest::from_event(event).inspect_err(|e| {
                tracing::error!(stage = %Stage::Failed, failed_in = %Stage::Validating, error = %e, "podcast generation failed");
            })?;

            tracing::Span::current().record("podcast_id", request.podcast_id.as_str());

            self.run(&request).await
        }
        .instrument(span)
        .await
    }

    /// Run an already validated request
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that failed
    pub async fn process(&self, request: &PodcastRequest) -> Result<String> {
        let span = tracing::info_span!("podcast_job", podcast_id = %request.podcast_id);
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: &PodcastRequest) -> Result<String> {
        let podcast_id = request.podcast_id.as_str();

        match self.stages(request).await {
            Ok(()) => {
                tracing::info!(
                    podcast_id,
                    stage = %Stage::Done,
                    "successfully completed podcast generation"
                );
                Ok(request.podcast_id.clone())
            }
            Err(e) => {
                tracing::error!(
                    podcast_id,
                    stage = %Stage::Failed,
                    failed_in = %e.stage(),
                    error = %e,
                    "podcast generation failed"
                );
                Err(e)
            }
        }
    }

    async fn stages(&self, request: &PodcastRequest) -> Result<()> {
        let podcast_id = request.podcast_id.as_str();

        tracing::info!(
            podcast_id,
            stage = %Stage::Synthesizing,
            synthesizer = self.synthesizer.name(),
            "starting speech synthesis"
        );
        let audio = self
            .synthesizer
            .synthesize(&request.script)
            .await
            .map_err(PodcastError::Synthesis)?;
        tracing::info!(podcast_id, bytes = audio.len(), "speech synthesis completed");

        let path = self.writer.artifact_path(podcast_id);
        tracing::info!(podcast_id, stage = %Stage::Writing, path = %path.display(), "saving audio file");
        let path = self
            .writer
            .write(podcast_id, &audio)
            .await
            .map_err(|source| PodcastError::Io { path, source })?;

        tracing::info!(podcast_id, stage = %Stage::Uploading, path = %path.display(), "uploading podcast audio");
        self.uploader.upload(&path).await.map_err(PodcastError::Storage)?;
        tracing::info!(podcast_id, "podcast audio uploaded");

        tracing::info!(podcast_id, stage = %Stage::UpdatingStatus, "marking podcast ready");
        self.status.mark_ready(podcast_id).await.map_err(PodcastError::Database)?;
        tracing::info!(podcast_id, "podcast status updated");

        if !self.keep_artifacts
            && let Err(e) = self.writer.remove(&path).await
        {
            tracing::warn!(podcast_id, path = %path.display(), error = %e, "failed to remove local artifact");
        }

        Ok(())
    }
}

impl std::fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandler")
            .field("synthesizer", &self.synthesizer.name())
            .field("artifact_dir", &self.writer.dir())
            .field("keep_artifacts", &self.keep_artifacts)
            .finish_non_exhaustive()
    }
}
