// Versioned snapshot envelope written to the state repository
use crate::application::state_repository::StateRepository;
use crate::domain::errors::StorageError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub const SNAPSHOT_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot<T> {
    state: T,
    version: u32,
}

/// Load and decode the snapshot under `key`.
///
/// A value that cannot be decoded is treated as absent so a corrupt entry
/// never blocks startup. I/O failures are returned.
pub async fn load_snapshot<T: DeserializeOwned>(
    repository: &dyn StateRepository,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = repository.load(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str::<Snapshot<T>>(&raw) {
        Ok(snapshot) => {
            if snapshot.version != SNAPSHOT_VERSION {
                tracing::warn!(key, version = snapshot.version, "Snapshot version mismatch, ignoring");
                return Ok(None);
            }
            Ok(Some(snapshot.state))
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding undecodable snapshot");
            Ok(None)
        }
    }
}

pub async fn save_snapshot<T: Serialize>(
    repository: &dyn StateRepository,
    key: &str,
    state: &T,
) -> Result<(), StorageError> {
    let snapshot = Snapshot {
        state,
        version: SNAPSHOT_VERSION,
    };
    let raw = serde_json::to_string(&snapshot).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    repository.save(key, &raw).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_repository::MemoryStateRepository;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Flag {
        is_dark_mode: bool,
    }

    #[tokio::test]
    async fn test_envelope_shape() {
        let repo = MemoryStateRepository::new();
        save_snapshot(&repo, "theme-storage", &Flag { is_dark_mode: true }).await.unwrap();

        let raw = repo.load("theme-storage").await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "state": { "isDarkMode": true }, "version": 0 }));
    }

    #[tokio::test]
    async fn test_missing_and_corrupt_snapshots_are_absent() {
        let repo = MemoryStateRepository::new();
        assert_eq!(load_snapshot::<Flag>(&repo, "theme-storage").await.unwrap(), None);

        repo.save("theme-storage", "{not json").await.unwrap();
        assert_eq!(load_snapshot::<Flag>(&repo, "theme-storage").await.unwrap(), None);

        repo.save("theme-storage", r#"{"state":{"isDarkMode":true},"version":3}"#)
            .await
            .unwrap();
        assert_eq!(load_snapshot::<Flag>(&repo, "theme-storage").await.unwrap(), None);
    }
}
