// File-backed state repository - One JSON file per key
use crate::application::state_repository::StateRepository;
use crate::domain::errors::StorageError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStateRepository {
    dir: PathBuf,
}

impl FileStateRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_plain_key(key) {
            return Err(io_error(
                key,
                std::io::Error::new(ErrorKind::InvalidInput, "key is not a plain file name"),
            ));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Keys map straight to file names: ASCII letters, digits, `-` and `_` only.
pub fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

#[async_trait]
impl StateRepository for FileStateRepository {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(key, e))?;

        // Write then rename so a crash never leaves a half-written snapshot
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| io_error(key, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error(key, e))?;

        tracing::trace!(key, path = %path.display(), bytes = value.len(), "Saved snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path());
        assert_eq!(repo.load("auth-storage").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_creates_dir_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path().join("nested"));

        repo.save("auth-storage", "first").await.unwrap();
        repo.save("auth-storage", "second").await.unwrap();

        assert_eq!(repo.load("auth-storage").await.unwrap().as_deref(), Some("second"));
        assert!(repo.dir().join("auth-storage.json").exists());
        assert!(!repo.dir().join("auth-storage.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path());
        for key in ["", "../escape", "a/b", "with space"] {
            let err = repo.save(key, "x").await.unwrap_err();
            assert!(matches!(err, StorageError::Io { .. }), "key {:?}", key);
        }
    }

    #[tokio::test]
    async fn test_read_failure_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the snapshot file should be cannot be read as a string
        std::fs::create_dir(dir.path().join("theme-storage.json")).unwrap();
        let repo = FileStateRepository::new(dir.path());
        assert!(repo.load("theme-storage").await.is_err());
    }
}
