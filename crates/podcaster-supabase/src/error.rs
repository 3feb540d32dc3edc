/// Errors returned while uploading audio to Supabase Storage
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// HTTP transport or connection error
    #[error("storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Storage returned a non-success status
    #[error("storage API error ({status}): {message}")]
    Api {
        /// HTTP status from Supabase
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// An object with the same key exists and upsert is disabled
    #[error("object '{key}' already exists in bucket '{bucket}'")]
    AlreadyExists {
        /// Bucket the upload targeted
        bucket: String,
        /// Object key that collided
        key: String,
    },

    /// The local artifact could not be read
    #[error("failed to read artifact {path}: {source}")]
    Artifact {
        /// Path of the artifact
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The request URL could not be built
    #[error("invalid storage URL: {0}")]
    Url(String),
}

/// Errors returned while updating podcast records through PostgREST
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// HTTP transport or connection error
    #[error("database request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// PostgREST returned a non-success status
    #[error("database API error ({status}): {message}")]
    Api {
        /// HTTP status from Supabase
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// The request URL could not be built
    #[error("invalid database URL: {0}")]
    Url(String),
}
