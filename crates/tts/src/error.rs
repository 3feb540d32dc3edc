use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis provider errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Provider rejected the request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed (missing or invalid API key)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider answered successfully but without any audio
    #[error("Provider returned an empty audio body")]
    EmptyAudio,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Failure reading the provider response
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl TtsError {
    /// Map a non-success provider response to an error
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed(message),
            400 | 422 => Self::InvalidRequest(message),
            _ => Self::ProviderApiError { status, message },
        }
    }
}
