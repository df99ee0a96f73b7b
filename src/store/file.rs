//! File-backed blob store
//!
//! Layout on disk: `<root>/<namespace>/<key>.json`

use super::{validate_key, BlobStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Blob store keeping one file per key inside a namespace directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>, namespace: &str) -> StoreResult<Self> {
        validate_key(namespace)?;
        Ok(Self {
            dir: root.as_ref().join(namespace),
        })
    }

    /// Namespace directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl BlobStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.key_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        let path = self.key_path(key)?;
        let dir = self.dir.clone();

        // Write to a sibling temp file, then rename over the target
        tokio::task::spawn_blocking(move || -> StoreResult<()> {
            std::fs::create_dir_all(&dir)?;
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(&value)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("write task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path(), "lab-dashboard").unwrap();

        assert_eq!(store.get("state").await.unwrap(), None);
        assert!(!store.dir().exists());
    }

    #[tokio::test]
    async fn test_set_creates_namespace_and_file() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path(), "lab-dashboard").unwrap();

        store.set("state", br#"{"notice":"hi"}"#.to_vec()).await.unwrap();

        let path = temp.path().join("lab-dashboard/state.json");
        assert!(path.exists());
        assert_eq!(
            store.get("state").await.unwrap(),
            Some(br#"{"notice":"hi"}"#.to_vec())
        );
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path(), "lab-dashboard").unwrap();

        store.set("state", b"first".to_vec()).await.unwrap();
        store.set("state", b"second".to_vec()).await.unwrap();

        assert_eq!(store.get("state").await.unwrap(), Some(b"second".to_vec()));
        // No temp files left behind
        let entries = std::fs::read_dir(store.dir()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path(), "lab-dashboard").unwrap();

        let err = store.get("../escape").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
        assert!(FileStore::new(temp.path(), "a/b").is_err());
    }
}
