//! Podcast generation handler
//!
//! Validates a request, synthesizes the script, writes `{podcast_id}.mp3`,
//! uploads it, and marks the podcast record ready. The speech model, storage,
//! and database are injected through the traits in [`capability`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod audio;
pub mod capability;
mod error;
mod handler;
mod request;
mod stage;
mod writer;

pub use audio::AudioData;
pub use capability::{SpeechSynthesizer, StatusUpdater, StorageUploader};
pub use error::{BoxError, Field, InvalidInputError, PodcastError, Result};
pub use handler::RequestHandler;
pub use request::{PodcastRequest, validate_input};
pub use stage::Stage;
pub use writer::{ARTIFACT_EXTENSION, AudioWriter};
