pub mod elevenlabs;
pub mod openai_tts;

use async_trait::async_trait;

use crate::{
    error::{Result, TtsError},
    types::{DEFAULT_CONTENT_TYPE, SpeechRequest, SpeechResponse},
};

/// Trait for TTS provider implementations
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize text to speech
    async fn synthesize(&self, request: SpeechRequest<'_>) -> Result<SpeechResponse>;

    /// Get the provider name
    fn name(&self) -> &str;
}

/// Turn a provider HTTP response into audio or a typed error
async fn read_audio(provider: &str, response: reqwest::Response) -> Result<SpeechResponse> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        tracing::error!("{provider} API error ({status}): {error_text}");

        return Err(TtsError::from_status(status.as_u16(), error_text));
    }

    let content_type = response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    let audio = response.bytes().await.map_err(|e| {
        tracing::error!("Failed to read {provider} response body: {e}");
        TtsError::InternalError(format!("failed to read {provider} response body: {e}"))
    })?;

    if audio.is_empty() {
        tracing::error!("{provider} returned an empty audio body");
        return Err(TtsError::EmptyAudio);
    }

    tracing::debug!("{provider} synthesis complete, {} bytes", audio.len());

    Ok(SpeechResponse {
        audio: audio.to_vec(),
        content_type,
    })
}
