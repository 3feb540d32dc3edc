//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use podcaster_config::{
    ArtifactsConfig, Config, DatabaseConfig, RuntimeConfig, ServerConfig, StorageConfig, SupabaseConfig,
    TtsConfig, TtsProviderType,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Point Supabase and the TTS provider at mock servers and write
    /// artifacts into `artifact_dir`
    pub fn new(supabase_url: &str, tts_url: &str, artifact_dir: &Path) -> Self {
        Self {
            config: Config {
                supabase: SupabaseConfig {
                    url: supabase_url.parse().expect("valid URL"),
                    key: SecretString::from("service-key"),
                    timeout: Duration::from_secs(5),
                },
                storage: StorageConfig::default(),
                database: DatabaseConfig::default(),
                tts: TtsConfig {
                    provider_type: TtsProviderType::OpenaiTts,
                    api_key: Some(SecretString::from("sk-test")),
                    base_url: Some(format!("{tts_url}/v1")),
                    model: "tts-1".to_owned(),
                    voice: "alloy".to_owned(),
                    speed: None,
                    timeout: Duration::from_secs(5),
                },
                artifacts: ArtifactsConfig {
                    dir: artifact_dir.to_path_buf(),
                    keep: false,
                },
                runtime: RuntimeConfig::default(),
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                telemetry: None,
            },
        }
    }

    /// Keep artifacts on disk after upload
    pub fn keep_artifacts(mut self) -> Self {
        self.config.artifacts.keep = true;
        self
    }

    /// Allow overwriting existing objects
    pub fn with_upsert(mut self) -> Self {
        self.config.storage.upsert = true;
        self
    }

    /// Poll jobs from `base_url` as worker `worker_id`
    pub fn with_job_endpoints(mut self, base_url: &str, worker_id: &str) -> Self {
        self.config.runtime = RuntimeConfig {
            job_url: Some(format!("{base_url}/v2/job-take/$ID")),
            result_url: Some(format!("{base_url}/v2/job-done/$ID")),
            api_key: Some(SecretString::from("runtime-key")),
            worker_id: worker_id.to_owned(),
            poll_interval: Duration::from_millis(20),
            concurrency: 1,
        };
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
