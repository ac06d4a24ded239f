// In-memory state repository for tests and throwaway runs
use crate::application::state_repository::StateRepository;
use crate::domain::errors::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStateRepository {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateRepository for MemoryStateRepository {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
