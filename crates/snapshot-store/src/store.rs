//! File-backed and in-memory snapshot stores.

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// JSON file holding one complete snapshot.
pub struct FileStore {
    storage_path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Overwrite the snapshot file with `value`.
    pub async fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(value)?;

        // Ensure parent directory exists
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        // Write atomically using temp file + rename
        let temp_path = self.storage_path.with_extension("tmp");
        fs::write(&temp_path, &data).await?;
        fs::rename(&temp_path, &self.storage_path).await?;

        debug!(
            "Saved snapshot ({} bytes) to {:?}",
            data.len(),
            self.storage_path
        );
        Ok(())
    }

    /// Read the snapshot file.
    ///
    /// Returns `T::default()` if the file doesn't exist or is blank.
    pub async fn load<T: DeserializeOwned + Default>(&self) -> Result<T, StoreError> {
        if !self.storage_path.exists() {
            info!(
                "Snapshot file not found at {:?}, starting empty",
                self.storage_path
            );
            return Ok(T::default());
        }

        let data = fs::read(&self.storage_path).await?;

        if data.iter().all(u8::is_ascii_whitespace) {
            warn!("Snapshot file {:?} is empty, starting empty", self.storage_path);
            return Ok(T::default());
        }

        let value = serde_json::from_slice(&data)?;
        debug!("Loaded snapshot from {:?}", self.storage_path);
        Ok(value)
    }

    /// Check if the snapshot file exists.
    pub fn exists(&self) -> bool {
        self.storage_path.exists()
    }
}

/// Store used when persistence is disabled.
pub struct MemoryStore;

impl MemoryStore {
    /// "Save" does nothing for memory store.
    pub async fn save<T: Serialize + ?Sized>(&self, _value: &T) -> Result<(), StoreError> {
        debug!("Memory store: save is a no-op");
        Ok(())
    }

    /// "Load" always returns the default value.
    pub async fn load<T: DeserializeOwned + Default>(&self) -> Result<T, StoreError> {
        debug!("Memory store: returning empty snapshot");
        Ok(T::default())
    }
}

/// Storage backend with or without a file behind it.
pub enum Store {
    /// JSON file storage
    File(FileStore),
    /// In-memory only (no persistence)
    Memory(MemoryStore),
}

impl Store {
    /// File-backed store at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Store::File(FileStore::new(path))
    }

    /// Store that never persists anything.
    pub fn memory() -> Self {
        Store::Memory(MemoryStore)
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Store::File(s) => Some(s.path()),
            Store::Memory(_) => None,
        }
    }

    /// Save a snapshot.
    pub async fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), StoreError> {
        match self {
            Store::File(s) => s.save(value).await,
            Store::Memory(s) => s.save(value).await,
        }
    }

    /// Load the latest snapshot.
    pub async fn load<T: DeserializeOwned + Default>(&self) -> Result<T, StoreError> {
        match self {
            Store::File(s) => s.load().await,
            Store::Memory(s) => s.load().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        names: Vec<String>,
    }

    fn sample() -> Snapshot {
        Snapshot {
            names: vec!["kyl_1".into(), "ann_2".into()],
        }
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::file(dir.path().join("snapshot.json"));

        store.save(&sample()).await.unwrap();
        let restored: Snapshot = store.load().await.unwrap();

        assert_eq!(restored, sample());
    }

    #[tokio::test]
    async fn test_file_store_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));

        assert!(!store.exists());
        let loaded: Snapshot = store.load().await.unwrap();
        assert_eq!(loaded, Snapshot::default());
    }

    #[tokio::test]
    async fn test_file_store_blank_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.json");
        std::fs::write(&path, "  \n").unwrap();

        let loaded: Vec<String> = FileStore::new(&path).load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_file_store_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("snapshot.json");
        let store = FileStore::new(&path);

        store.save(&sample()).await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_overwrites_whole_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::file(dir.path().join("snapshot.json"));

        store.save(&sample()).await.unwrap();
        store
            .save(&Snapshot {
                names: vec!["only".into()],
            })
            .await
            .unwrap();

        let restored: Snapshot = store.load().await.unwrap();
        assert_eq!(restored.names, vec!["only".to_string()]);
    }

    #[tokio::test]
    async fn test_file_store_rejects_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<Snapshot, _> = Store::file(&path).load().await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_memory_store_operations() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let store = Store::memory();
            assert!(store.path().is_none());

            // Save succeeds but keeps nothing
            store.save(&sample()).await.unwrap();

            let loaded: Snapshot = store.load().await.unwrap();
            assert_eq!(loaded, Snapshot::default());
        });
    }
}
