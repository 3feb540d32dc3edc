use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

/// Serverless job runtime settings
///
/// `job_url` and `result_url` may contain `$ID`, replaced by the worker id
/// when polling and by the job id when posting a result.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Endpoint handing out the next job
    #[serde(default, deserialize_with = "crate::non_empty")]
    pub job_url: Option<String>,
    /// Endpoint receiving job results
    #[serde(default, deserialize_with = "crate::non_empty")]
    pub result_url: Option<String>,
    /// Value of the `Authorization` header sent to the job endpoints
    #[serde(default, deserialize_with = "crate::non_empty")]
    pub api_key: Option<SecretString>,
    /// Identifier of this worker, substituted into `job_url`
    #[serde(default = "default_worker_id")]
    pub worker_id: String,
    /// Delay before polling again after an empty poll or a poll failure
    #[serde(default = "default_poll_interval", deserialize_with = "duration_str::deserialize_duration")]
    pub poll_interval: Duration,
    /// Number of independent polling loops
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            job_url: None,
            result_url: None,
            api_key: None,
            worker_id: default_worker_id(),
            poll_interval: default_poll_interval(),
            concurrency: default_concurrency(),
        }
    }
}

fn default_worker_id() -> String {
    "local".to_string()
}

const fn default_poll_interval() -> Duration {
    Duration::from_secs(1)
}

const fn default_concurrency() -> usize {
    1
}
