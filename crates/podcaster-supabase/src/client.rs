use std::time::Duration;

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{DatabaseError, StorageError};

/// Object metadata sent with every upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    /// `cache-control` max-age in seconds
    pub cache_control: u32,
    /// Content type stored with the object
    pub content_type: String,
    /// Replace an existing object with the same key
    pub upsert: bool,
}

/// Async HTTP client for the Supabase Storage and PostgREST APIs
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: Url,
    key: SecretString,
}

impl SupabaseClient {
    /// Create a new Supabase client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(base_url: Url, key: SecretString, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url, key })
    }

    /// Upload raw bytes to `bucket/key`
    ///
    /// POST `/storage/v1/object/:bucket/:key`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the object already exists
    /// while upsert is disabled, or Storage returns an error
    pub async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        options: &UploadOptions,
    ) -> Result<(), StorageError> {
        let url = self
            .endpoint(&["storage", "v1", "object", bucket, key])
            .map_err(StorageError::Url)?;

        let response = self
            .authorized(self.http.post(url))
            .header("cache-control", format!("max-age={}", options.cache_control))
            .header("content-type", options.content_type.as_str())
            .header("x-upsert", if options.upsert { "true" } else { "false" })
            .body(body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();

        if is_duplicate(status, &message) {
            return Err(StorageError::AlreadyExists {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
            });
        }

        Err(StorageError::Api { status, message })
    }

    /// Set `values` on every row of `table` where `column` equals `value`
    ///
    /// PATCH `/rest/v1/:table?:column=eq.:value`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or PostgREST returns an error
    pub async fn update_rows(
        &self,
        table: &str,
        column: &str,
        value: &str,
        values: &serde_json::Value,
    ) -> Result<(), DatabaseError> {
        let url = self.endpoint(&["rest", "v1", table]).map_err(DatabaseError::Url)?;

        let response = self
            .authorized(self.http.patch(url))
            .query(&[(column, format!("eq.{value}"))])
            .header("prefer", "return=minimal")
            .json(values)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(DatabaseError::Api { status, message })
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.key.expose_secret();

        request.header("apikey", key).bearer_auth(key)
    }

    /// Append percent-encoded path segments to the project URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, String> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| format!("base URL cannot have a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

/// Storage reports a key collision either as 409 or as a 400 whose body
/// carries `"statusCode":"409"` / `"error":"Duplicate"`
fn is_duplicate(status: u16, message: &str) -> bool {
    status == 409 || (status == 400 && (message.contains("Duplicate") || message.contains("\"409\"")))
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
