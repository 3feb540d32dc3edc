use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Speech synthesis provider used for every job
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: TtsProviderType,
    /// API key
    #[serde(default, deserialize_with = "crate::non_empty")]
    pub api_key: Option<SecretString>,
    /// Base URL override, e.g. a self-hosted OpenAI-compatible speech server
    #[serde(default, deserialize_with = "crate::non_empty")]
    pub base_url: Option<String>,
    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,
    /// Voice identifier passed to the provider
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Speech speed multiplier (0.25 to 4.0)
    #[serde(default, deserialize_with = "optional_speed")]
    pub speed: Option<f64>,
    /// Upper bound for a single synthesis call
    #[serde(default = "default_timeout", deserialize_with = "duration_str::deserialize_duration")]
    pub timeout: Duration,
}

/// Supported TTS providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsProviderType {
    /// `OpenAI` speech API or any server speaking the same protocol
    OpenaiTts,
    /// `ElevenLabs`
    Elevenlabs,
}

fn default_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "alloy".to_string()
}

const fn default_timeout() -> Duration {
    Duration::from_secs(300)
}

/// Accept either a number or a (possibly empty) string so the value can come
/// from an env placeholder
fn optional_speed<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Speed {
        Number(f64),
        Text(String),
    }

    match Speed::deserialize(deserializer)? {
        Speed::Number(value) => Ok(Some(value)),
        Speed::Text(text) if text.trim().is_empty() => Ok(None),
        Speed::Text(text) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid speed '{text}': {e}"))),
    }
}
