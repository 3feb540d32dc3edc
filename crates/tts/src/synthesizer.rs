use async_trait::async_trait;
use podcaster_config::{TtsConfig, TtsProviderType};
use podcaster_core::{AudioData, BoxError, SpeechSynthesizer};
use secrecy::SecretString;

use crate::{
    error::{Result, TtsError},
    http_client::http_client,
    provider::{TtsProvider, elevenlabs::ElevenLabsProvider, openai_tts::OpenAiTtsProvider},
    types::SpeechRequest,
};

/// Speech synthesizer bound to one provider and one voice
///
/// Built once at process start; every job reuses the provider's connection
/// pool.
pub struct Synthesizer {
    provider: Box<dyn TtsProvider>,
    model: String,
    voice: String,
    speed: Option<f64>,
}

impl Synthesizer {
    /// Synthesize a script with the configured model and voice
    pub async fn speak(&self, script: &str) -> Result<AudioData> {
        let request = SpeechRequest {
            model: &self.model,
            input: script,
            voice: &self.voice,
            speed: self.speed,
        };

        let response = self.provider.synthesize(request).await?;

        Ok(AudioData::new(response.audio, response.content_type))
    }
}

#[async_trait]
impl SpeechSynthesizer for Synthesizer {
    async fn synthesize(&self, script: &str) -> std::result::Result<AudioData, BoxError> {
        Ok(self.speak(script).await?)
    }

    fn name(&self) -> &str {
        self.provider.name()
    }
}

/// Builder for constructing the synthesizer from configuration
pub struct SynthesizerBuilder<'a> {
    config: &'a TtsConfig,
}

impl<'a> SynthesizerBuilder<'a> {
    pub const fn new(config: &'a TtsConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<Synthesizer> {
        let config = self.config;
        let api_key = resolve_api_key(config)?;
        let client = http_client(config.timeout)
            .map_err(|e| TtsError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        let provider: Box<dyn TtsProvider> = match config.provider_type {
            TtsProviderType::OpenaiTts => Box::new(OpenAiTtsProvider::new(
                "openai_tts".to_string(),
                client,
                api_key,
                config.base_url.clone(),
            )),
            TtsProviderType::Elevenlabs => Box::new(ElevenLabsProvider::new(
                "elevenlabs".to_string(),
                client,
                api_key,
                config.base_url.clone(),
            )),
        };

        tracing::debug!(
            provider = provider.name(),
            model = %config.model,
            voice = %config.voice,
            "TTS synthesizer initialized"
        );

        Ok(Synthesizer {
            provider,
            model: config.model.clone(),
            voice: config.voice.clone(),
            speed: config.speed,
        })
    }
}

fn resolve_api_key(config: &TtsConfig) -> Result<SecretString> {
    config
        .api_key
        .clone()
        .ok_or_else(|| TtsError::ConfigError("API key required for TTS provider".to_string()))
}
