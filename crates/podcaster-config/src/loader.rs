use std::path::Path;

use secrecy::ExposeSecret;

use crate::{Config, TtsProviderType};

/// Configuration used when no file is given, driven entirely by env vars
const DEFAULT_CONFIG: &str = include_str!("../default.toml");

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml_str(&raw)
    }

    /// Load the built-in configuration
    ///
    /// Requires `SUPABASE_URL` and `SUPABASE_KEY`; everything else has a
    /// default or an optional env override.
    ///
    /// # Errors
    ///
    /// Returns an error if a required environment variable is missing or the
    /// resulting configuration is invalid
    pub fn load_default() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Parse configuration from raw TOML text with env placeholders
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_supabase()?;
        self.validate_storage()?;
        self.validate_database()?;
        self.validate_tts()?;
        self.validate_runtime()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_supabase(&self) -> anyhow::Result<()> {
        let url = &self.supabase.url;

        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            anyhow::bail!("supabase.url must be an http(s) URL with a host, got '{url}'");
        }

        if self.supabase.key.expose_secret().trim().is_empty() {
            anyhow::bail!("supabase.key must not be empty");
        }

        if self.supabase.timeout.is_zero() {
            anyhow::bail!("supabase.timeout must be greater than 0");
        }

        Ok(())
    }

    fn validate_storage(&self) -> anyhow::Result<()> {
        let bucket = &self.storage.bucket;

        if bucket.is_empty() || bucket.contains('/') {
            anyhow::bail!("storage.bucket must be a non-empty name without '/', got '{bucket}'");
        }

        if self.storage.content_type.is_empty() {
            anyhow::bail!("storage.content_type must not be empty");
        }

        Ok(())
    }

    fn validate_database(&self) -> anyhow::Result<()> {
        let database = &self.database;

        for (name, value) in [
            ("table", &database.table),
            ("id_column", &database.id_column),
            ("status_column", &database.status_column),
            ("ready_status", &database.ready_status),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("database.{name} must not be empty");
            }
        }

        Ok(())
    }

    fn validate_tts(&self) -> anyhow::Result<()> {
        let tts = &self.tts;

        if tts.api_key.is_none() {
            let provider = match tts.provider_type {
                TtsProviderType::OpenaiTts => "openai_tts",
                TtsProviderType::Elevenlabs => "elevenlabs",
            };
            anyhow::bail!("tts.api_key is required for provider '{provider}'");
        }

        if tts.model.trim().is_empty() {
            anyhow::bail!("tts.model must not be empty");
        }

        if tts.voice.trim().is_empty() {
            anyhow::bail!("tts.voice must not be empty");
        }

        if let Some(speed) = tts.speed
            && !(0.25..=4.0).contains(&speed)
        {
            anyhow::bail!("tts.speed must be between 0.25 and 4.0, got {speed}");
        }

        if let Some(ref base_url) = tts.base_url {
            url::Url::parse(base_url).map_err(|e| anyhow::anyhow!("invalid tts.base_url '{base_url}': {e}"))?;
        }

        Ok(())
    }

    fn validate_runtime(&self) -> anyhow::Result<()> {
        let runtime = &self.runtime;

        if runtime.concurrency == 0 {
            anyhow::bail!("runtime.concurrency must be at least 1");
        }

        if runtime.job_url.is_some() != runtime.result_url.is_some() {
            anyhow::bail!("runtime.job_url and runtime.result_url must be configured together");
        }

        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let health_path = &self.server.health_path;

        if !health_path.starts_with('/') {
            anyhow::bail!("server.health_path must start with '/', got '{health_path}'");
        }

        Ok(())
    }
}
