use serde::Deserialize;

/// Table holding the podcast records whose status is flipped to ready
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_id_column")]
    pub id_column: String,
    #[serde(default = "default_status_column")]
    pub status_column: String,
    /// Value written to the status column once audio is available
    #[serde(default = "default_ready_status")]
    pub ready_status: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            id_column: default_id_column(),
            status_column: default_status_column(),
            ready_status: default_ready_status(),
        }
    }
}

fn default_table() -> String {
    "podcasts".to_string()
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_status_column() -> String {
    "status".to_string()
}

fn default_ready_status() -> String {
    "READY".to_string()
}
