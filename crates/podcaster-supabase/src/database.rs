use async_trait::async_trait;
use podcaster_config::DatabaseConfig;
use podcaster_core::{BoxError, StatusUpdater};
use serde_json::{Map, Value};

use crate::client::SupabaseClient;
use crate::error::DatabaseError;

/// Podcast records exposed through PostgREST
#[derive(Debug, Clone)]
pub struct PodcastTable {
    client: SupabaseClient,
    config: DatabaseConfig,
}

impl PodcastTable {
    pub const fn new(client: SupabaseClient, config: DatabaseConfig) -> Self {
        Self { client, config }
    }

    /// Set the status column on the matching record
    ///
    /// Matching zero rows is not an error; PostgREST answers 204 either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected
    pub async fn set_status(&self, podcast_id: &str, status: &str) -> Result<(), DatabaseError> {
        let mut values = Map::new();
        values.insert(self.config.status_column.clone(), Value::String(status.to_owned()));

        self.client
            .update_rows(
                &self.config.table,
                &self.config.id_column,
                podcast_id,
                &Value::Object(values),
            )
            .await?;

        tracing::info!(table = %self.config.table, podcast_id, status, "podcast status updated");

        Ok(())
    }
}

#[async_trait]
impl StatusUpdater for PodcastTable {
    async fn mark_ready(&self, podcast_id: &str) -> Result<(), BoxError> {
        self.set_status(podcast_id, &self.config.ready_status).await?;
        Ok(())
    }
}
