//! OpenAI-compatible speech endpoint backed by wiremock

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bytes returned as synthesized audio
pub const AUDIO: &[u8] = b"ID3\x04\x00fake-mp3-frames";

pub struct MockTts {
    server: MockServer,
}

impl MockTts {
    /// Start a provider that answers every request with [`AUDIO`]
    pub async fn start() -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/audio/speech"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(AUDIO.to_vec(), "audio/mpeg"))
            .mount(&server)
            .await;

        Self { server }
    }

    /// Start a provider that fails every request
    pub async fn failing(status: u16) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/audio/speech"))
            .respond_with(ResponseTemplate::new(status).set_body_string("model overloaded"))
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Scripts received, in order
    pub async fn scripts(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice::<serde_json::Value>(&request.body).ok())
            .filter_map(|body| body["input"].as_str().map(str::to_owned))
            .collect()
    }
}
