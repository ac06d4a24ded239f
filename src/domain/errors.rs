// Error kinds surfaced to the presentation layer
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode snapshot for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum DashboardError {
    // Only produced by authenticators that actually verify credentials
    #[allow(dead_code)]
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
