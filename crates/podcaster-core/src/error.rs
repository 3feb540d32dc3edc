use std::fmt;
use std::path::PathBuf;

use crate::stage::Stage;

/// Error type returned by the external capabilities (model, storage, database)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, PodcastError>;

/// Required request field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PodcastId,
    PodcastScript,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PodcastId => "podcast_id",
            Self::PodcastScript => "podcast_script",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload rejected before any work is done
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// One or more required fields are absent, empty, or not strings
    #[error("missing required input parameters: {}", join_fields(.0))]
    Missing(Vec<Field>),

    /// The identifier names the artifact file and must be a plain file name
    #[error("podcast_id {0:?} cannot be used as a file name")]
    UnsafeIdentifier(String),
}

impl InvalidInputError {
    /// Fields the caller has to fix
    pub fn fields(&self) -> &[Field] {
        match self {
            Self::Missing(fields) => fields,
            Self::UnsafeIdentifier(_) => &[Field::PodcastId],
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
}

/// Failure of a podcast generation request
///
/// Each variant belongs to exactly one handler stage; none of them is
/// recovered from inside the handler.
#[derive(Debug, thiserror::Error)]
pub enum PodcastError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("speech synthesis failed: {0}")]
    Synthesis(#[source] BoxError),

    #[error("failed to write audio artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage upload failed: {0}")]
    Storage(#[source] BoxError),

    #[error("status update failed: {0}")]
    Database(#[source] BoxError),
}

impl PodcastError {
    /// Stage the request was in when it failed
    pub const fn stage(&self) -> Stage {
        match self {
            Self::InvalidInput(_) => Stage::Validating,
            Self::Synthesis(_) => Stage::Synthesizing,
            Self::Io { .. } => Stage::Writing,
            Self::Storage(_) => Stage::Uploading,
            Self::Database(_) => Stage::UpdatingStatus,
        }
    }

    /// Machine-readable error type reported to the runtime
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input_error",
            Self::Synthesis(_) => "synthesis_error",
            Self::Io { .. } => "io_error",
            Self::Storage(_) => "storage_error",
            Self::Database(_) => "database_error",
        }
    }
}
