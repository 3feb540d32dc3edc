use std::path::Path;

use async_trait::async_trait;
use podcaster_config::StorageConfig;
use podcaster_core::{BoxError, StorageUploader};

use crate::client::{SupabaseClient, UploadOptions};
use crate::error::StorageError;

/// Uploads podcast artifacts to a Supabase Storage bucket
///
/// The object key is the artifact's file name, so `abc123.mp3` lands at
/// `podcasts/abc123.mp3`.
#[derive(Debug, Clone)]
pub struct PodcastStorage {
    client: SupabaseClient,
    bucket: String,
    options: UploadOptions,
}

impl PodcastStorage {
    pub fn new(client: SupabaseClient, config: &StorageConfig) -> Self {
        Self {
            client,
            bucket: config.bucket.clone(),
            options: UploadOptions {
                cache_control: config.cache_control,
                content_type: config.content_type.clone(),
                upsert: config.upsert,
            },
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Read the artifact from disk and store it under its file name
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be read or the upload is
    /// rejected
    pub async fn upload_artifact(&self, artifact: &Path) -> Result<String, StorageError> {
        let key = artifact
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| StorageError::Url(format!("artifact has no file name: {}", artifact.display())))?
            .to_owned();

        let body = tokio::fs::read(artifact).await.map_err(|source| StorageError::Artifact {
            path: artifact.display().to_string(),
            source,
        })?;

        let size = body.len();

        self.client
            .upload_object(&self.bucket, &key, body, &self.options)
            .await?;

        tracing::info!(bucket = %self.bucket, key = %key, size, "artifact uploaded");

        Ok(key)
    }
}

#[async_trait]
impl StorageUploader for PodcastStorage {
    async fn upload(&self, artifact: &Path) -> Result<(), BoxError> {
        self.upload_artifact(artifact).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;
    use url::Url;
    use wiremock::matchers::{body_bytes, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn storage(server: &MockServer, config: &StorageConfig) -> PodcastStorage {
        let client = SupabaseClient::new(
            Url::parse(&server.uri()).unwrap(),
            SecretString::from("service-key"),
            Duration::from_secs(5),
        )
        .unwrap();

        PodcastStorage::new(client, config)
    }

    #[tokio::test]
    async fn uploads_artifact_under_file_name() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/storage/v1/object/podcasts/abc123.mp3"))
            .and(header("content-type", "audio/mpeg"))
            .and(header("cache-control", "max-age=3600"))
            .and(header("x-upsert", "false"))
            .and(body_bytes(b"ID3-audio".to_vec()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("abc123.mp3");
        tokio::fs::write(&artifact, b"ID3-audio").await.unwrap();

        let key = storage(&server, &StorageConfig::default())
            .upload_artifact(&artifact)
            .await
            .unwrap();

        assert_eq!(key, "abc123.mp3");
    }

    #[tokio::test]
    async fn custom_bucket_and_cache_control() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/storage/v1/object/episodes/abc123.mp3"))
            .and(header("cache-control", "max-age=60"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("abc123.mp3");
        tokio::fs::write(&artifact, b"ID3").await.unwrap();

        let config = StorageConfig {
            bucket: "episodes".to_owned(),
            cache_control: 60,
            ..StorageConfig::default()
        };

        let storage = storage(&server, &config);
        assert_eq!(storage.bucket(), "episodes");

        storage.upload(&artifact).await.unwrap();
    }

    #[tokio::test]
    async fn missing_artifact_fails_without_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();

        let err = storage(&server, &StorageConfig::default())
            .upload_artifact(&dir.path().join("abc123.mp3"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Artifact { .. }));
    }

    #[tokio::test]
    async fn duplicate_surfaces_through_trait() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(409).set_body_string("Duplicate"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("abc123.mp3");
        tokio::fs::write(&artifact, b"ID3").await.unwrap();

        let err = storage(&server, &StorageConfig::default())
            .upload(&artifact)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("already exists"));
    }
}
