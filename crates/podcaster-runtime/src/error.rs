/// Errors talking to the serverless job endpoints
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// HTTP transport or connection error
    #[error("job endpoint request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The job endpoint returned a non-success status
    #[error("job endpoint error ({status}): {message}")]
    Api {
        /// HTTP status from the endpoint
        status: u16,
        /// Response body
        message: String,
    },

    /// A job could not be decoded
    #[error("invalid job payload: {0}")]
    InvalidJob(String),

    /// Worker mode was started without the job endpoints
    #[error("runtime configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
