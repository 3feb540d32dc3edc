/// Provider-neutral speech request built from configuration and a script
#[derive(Debug, Clone)]
pub struct SpeechRequest<'a> {
    /// Model identifier (e.g. "tts-1" or "`eleven_multilingual_v2`")
    pub model: &'a str,
    /// Text to synthesize into speech
    pub input: &'a str,
    /// Voice identifier (e.g. "alloy" or an `ElevenLabs` voice ID)
    pub voice: &'a str,
    /// Speech speed multiplier (0.25 to 4.0)
    pub speed: Option<f64>,
}

/// Raw audio response from a TTS provider
#[derive(Debug)]
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

/// Output format requested from every provider; artifacts are stored as MP3
pub const RESPONSE_FORMAT: &str = "mp3";

/// Content type assumed when a provider does not send one
pub const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";
