use std::time::Duration;

use podcaster_config::RuntimeConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, RuntimeError};

/// Placeholder substituted into the job endpoint URLs
const ID_PLACEHOLDER: &str = "$ID";

/// Job handed out by the serverless platform
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub id: String,
    /// Untyped handler input; validated by the handler
    #[serde(default)]
    pub input: Value,
}

impl Job {
    /// The event passed to the handler
    pub fn event(&self) -> Value {
        serde_json::json!({ "id": self.id, "input": self.input })
    }
}

/// Result posted back for a job
///
/// Serializes as `{"output": "<podcast_id>"}` or `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobResult {
    Output(String),
    Error(String),
}

/// Client for the job and result endpoints
#[derive(Clone)]
pub struct JobClient {
    http: reqwest::Client,
    job_url: String,
    result_url: String,
    api_key: Option<SecretString>,
}

impl JobClient {
    /// Create a client from the runtime configuration
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is missing or the HTTP client
    /// cannot be built
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let (Some(job_url), Some(result_url)) = (&config.job_url, &config.result_url) else {
            return Err(RuntimeError::Config(
                "worker mode requires runtime.job_url and runtime.result_url".to_string(),
            ));
        };

        // Job requests may long-poll, so only connecting is bounded
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            job_url: job_url.clone(),
            result_url: result_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the next job for `worker_id`
    ///
    /// `204 No Content` or an empty body means no job is queued.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint rejects it, or the
    /// body is not a job
    pub async fn next_job(&self, worker_id: &str) -> Result<Option<Job>> {
        let url = self.job_url.replace(ID_PLACEHOLDER, worker_id);

        let response = self.authorized(self.http.get(url)).send().await?;

        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(RuntimeError::Api { status, message });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let job = serde_json::from_str::<Job>(&body).map_err(|e| RuntimeError::InvalidJob(e.to_string()))?;

        Ok(Some(job))
    }

    /// Post the result of `job_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the endpoint rejects it
    pub async fn post_result(&self, job_id: &str, result: &JobResult) -> Result<()> {
        let url = self.result_url.replace(ID_PLACEHOLDER, job_id);

        let response = self.authorized(self.http.post(url)).json(result).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(RuntimeError::Api { status, message })
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(http::header::AUTHORIZATION, key.expose_secret()),
            None => request,
        }
    }
}

impl std::fmt::Debug for JobClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobClient")
            .field("job_url", &self.job_url)
            .field("result_url", &self.result_url)
            .finish_non_exhaustive()
    }
}
