use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::{Result, TtsError},
    types::{DEFAULT_CONTENT_TYPE, SpeechRequest, SpeechResponse},
};

use super::{TtsProvider, read_audio};

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// `ElevenLabs` TTS provider
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    name: String,
}

impl ElevenLabsProvider {
    pub fn new(name: String, client: Client, api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_ELEVENLABS_API_URL.to_string());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            name,
        }
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_settings: Option<VoiceSettings>,
}

#[derive(serde::Serialize)]
struct VoiceSettings {
    speed: f64,
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    async fn synthesize(&self, request: SpeechRequest<'_>) -> Result<SpeechResponse> {
        let url = format!("{}/text-to-speech/{}", self.base_url, request.voice);

        tracing::debug!(
            "ElevenLabs TTS request: model={}, voice={}, input_len={}",
            request.model,
            request.voice,
            request.input.len(),
        );

        let body = ElevenLabsRequest {
            text: request.input,
            model_id: request.model,
            voice_settings: request.speed.map(|speed| VoiceSettings { speed }),
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", self.api_key.expose_secret())
            .header(http::header::ACCEPT, DEFAULT_CONTENT_TYPE)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        read_audio("ElevenLabs", response).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
