// Repository trait for persisted client state
use crate::domain::errors::StorageError;
use async_trait::async_trait;

/// Key-value store holding one serialized snapshot per key.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Read the raw snapshot stored under `key`, if any
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the snapshot stored under `key`
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
