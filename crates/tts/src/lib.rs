//! Speech synthesis over hosted TTS APIs
//!
//! Exposes [`Synthesizer`], the process-wide implementation of
//! [`podcaster_core::SpeechSynthesizer`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod synthesizer;
mod types;

use std::sync::Arc;

pub use error::{Result, TtsError};
pub use synthesizer::{Synthesizer, SynthesizerBuilder};

/// Build the synthesizer from configuration
pub fn build_synthesizer(config: &podcaster_config::TtsConfig) -> anyhow::Result<Arc<Synthesizer>> {
    let synthesizer = Arc::new(
        SynthesizerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS synthesizer: {e}"))?,
    );
    Ok(synthesizer)
}
