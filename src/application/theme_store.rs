// Theme store - Dark/light flag persisted like the session
use crate::application::snapshot::{load_snapshot, save_snapshot};
use crate::application::state_repository::StateRepository;
use crate::domain::errors::StorageError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeState {
    is_dark_mode: bool,
}

pub struct ThemeStore {
    repository: Arc<dyn StateRepository>,
    key: String,
    state: RwLock<ThemeState>,
}

impl ThemeStore {
    pub async fn load(
        repository: Arc<dyn StateRepository>,
        key: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let key = key.into();
        let state: ThemeState = load_snapshot(repository.as_ref(), &key)
            .await?
            .unwrap_or_default();
        tracing::debug!(key = %key, dark = state.is_dark_mode, "Loaded theme");

        Ok(Self {
            repository,
            key,
            state: RwLock::new(state),
        })
    }

    pub async fn is_dark_mode(&self) -> bool {
        self.state.read().await.is_dark_mode
    }

    /// Flip the flag and return the new value.
    pub async fn toggle(&self) -> Result<bool, StorageError> {
        let mut guard = self.state.write().await;
        let next = ThemeState {
            is_dark_mode: !guard.is_dark_mode,
        };
        save_snapshot(self.repository.as_ref(), &self.key, &next).await?;
        *guard = next;
        Ok(next.is_dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_repository::MemoryStateRepository;

    #[tokio::test]
    async fn test_defaults_to_light() {
        let store = ThemeStore::load(Arc::new(MemoryStateRepository::new()), "theme-storage")
            .await
            .unwrap();
        assert!(!store.is_dark_mode().await);
    }

    #[tokio::test]
    async fn test_double_toggle_restores() {
        let store = ThemeStore::load(Arc::new(MemoryStateRepository::new()), "theme-storage")
            .await
            .unwrap();
        let before = store.is_dark_mode().await;
        assert_eq!(store.toggle().await.unwrap(), !before);
        assert_eq!(store.toggle().await.unwrap(), before);
        assert_eq!(store.is_dark_mode().await, before);
    }

    #[tokio::test]
    async fn test_toggle_survives_reload() {
        let repo = Arc::new(MemoryStateRepository::new());
        let store = ThemeStore::load(repo.clone(), "theme-storage").await.unwrap();
        store.toggle().await.unwrap();

        let reloaded = ThemeStore::load(repo, "theme-storage").await.unwrap();
        assert!(reloaded.is_dark_mode().await);
    }
}
