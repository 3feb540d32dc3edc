use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Connection settings shared by the storage and database clients
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupabaseConfig {
    /// Project URL (e.g. `https://<project>.supabase.co`)
    pub url: Url,
    /// Service key sent as both `apikey` and bearer token
    pub key: SecretString,
    /// Per-request timeout for storage and database calls
    #[serde(default = "default_timeout", deserialize_with = "duration_str::deserialize_duration")]
    pub timeout: Duration,
}

const fn default_timeout() -> Duration {
    Duration::from_secs(60)
}
