use std::net::SocketAddr;

use serde::Deserialize;

/// Local HTTP API used by `podcaster serve`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default = "default_health_path")]
    pub health_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            health_path: default_health_path(),
        }
    }
}

fn default_health_path() -> String {
    "/health".to_string()
}
