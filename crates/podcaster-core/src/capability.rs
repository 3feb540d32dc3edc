//! External collaborators of the handler
//!
//! The handler only sees these traits; the model, storage, and database
//! clients are built once at process start and injected, so tests can swap
//! in fakes.

use std::path::Path;

use async_trait::async_trait;

use crate::{audio::AudioData, error::BoxError};

/// Converts a script into audio
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize the whole script in a single call
    async fn synthesize(&self, script: &str) -> Result<AudioData, BoxError>;

    /// Name used in logs
    fn name(&self) -> &str;
}

/// Pushes a local artifact to object storage under its file name
#[async_trait]
pub trait StorageUploader: Send + Sync {
    async fn upload(&self, artifact: &Path) -> Result<(), BoxError>;
}

/// Flips a podcast record to the ready status
///
/// Implementations must be idempotent: a retried request applies the same
/// update again.
#[async_trait]
pub trait StatusUpdater: Send + Sync {
    async fn mark_ready(&self, podcast_id: &str) -> Result<(), BoxError>;
}
