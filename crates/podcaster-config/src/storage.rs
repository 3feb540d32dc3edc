use serde::Deserialize;

/// Object storage settings for uploaded audio
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Bucket receiving the audio artifacts
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// `cache-control` max-age, in seconds, stored with each object
    #[serde(default = "default_cache_control")]
    pub cache_control: u32,
    /// Content type stored with each object
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Overwrite an existing object with the same key
    #[serde(default)]
    pub upsert: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            cache_control: default_cache_control(),
            content_type: default_content_type(),
            upsert: false,
        }
    }
}

fn default_bucket() -> String {
    "podcasts".to_string()
}

const fn default_cache_control() -> u32 {
    3600
}

fn default_content_type() -> String {
    "audio/mpeg".to_string()
}
