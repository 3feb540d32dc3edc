#![allow(clippy::must_use_candidate)]

pub mod artifacts;
pub mod database;
mod env;
mod loader;
pub mod runtime;
pub mod server;
pub mod storage;
pub mod supabase;
pub mod telemetry;
pub mod tts;

use serde::{Deserialize, Deserializer};

pub use artifacts::*;
pub use database::*;
pub use env::ExpandError;
pub use runtime::*;
pub use server::*;
pub use storage::*;
pub use supabase::*;
pub use telemetry::{LogFormat, TelemetryConfig};
pub use tts::*;

/// Top-level podcaster configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Storage and database endpoint
    pub supabase: SupabaseConfig,
    /// Object storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Status table settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Speech synthesis provider
    pub tts: TtsConfig,
    /// Local audio artifacts
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    /// Serverless job runtime
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Local HTTP API
    #[serde(default)]
    pub server: ServerConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

/// Treat an empty (or blank) string as an absent value
///
/// Lets optional settings be filled from `{{ env.VAR | default("") }}`.
fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()).map(T::from))
}
