use std::path::PathBuf;

use serde::Deserialize;

/// Local handling of synthesized audio files
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactsConfig {
    /// Directory the `{podcast_id}.mp3` files are written to
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Keep the local file after a successful request
    #[serde(default)]
    pub keep: bool,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            keep: false,
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}
