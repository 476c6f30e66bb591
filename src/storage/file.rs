//! JSON-file backed key-value storage.
//!
//! The whole store is one JSON object. Reads parse the file on every call so
//! that several store instances over the same path stay consistent. Writes
//! take an exclusive lock on a sidecar `.lock` file, re-read the document,
//! apply the change and atomically replace the file. A write over a
//! corrupted file starts from an empty document.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::{Map, Value};

use super::error::StorageError;
use super::kv::KeyValueStore;

pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store at `path`. The file and its parent directories are
    /// created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data dir>/everytip/storage.json`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("everytip").join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_document(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(self.io_error(err)),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::Corrupted {
            path: self.path.clone(),
            source,
        })
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), StorageError> {
        let tmp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(document).map_err(|source| {
            StorageError::Corrupted {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp = File::create(&tmp_path).map_err(|e| self.io_error(e))?;
        tmp.write_all(&bytes).map_err(|e| self.io_error(e))?;
        tmp.sync_all().map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))
    }

    /// A corrupted document is replaced on the next write instead of
    /// blocking every later write.
    fn read_for_update(&self) -> Result<Map<String, Value>, StorageError> {
        match self.read_document() {
            Err(StorageError::Corrupted { source, .. }) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %source,
                    "Storage file is corrupted, starting from an empty document"
                );
                Ok(Map::new())
            }
            other => other,
        }
    }

    /// Run a read-modify-write cycle under the exclusive file lock.
    fn update<F>(&self, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.path.with_extension("lock"))
            .map_err(|e| self.io_error(e))?;
        lock_file.lock_exclusive().map_err(|e| self.io_error(e))?;

        let result = self.read_for_update().and_then(|mut document| {
            apply(&mut document);
            self.write_document(&document)
        });

        let _ = FileExt::unlock(&lock_file);
        result
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        tracing::debug!(key, path = %self.path.display(), "Persisting value");
        self.update(|document| {
            document.insert(key.to_string(), value);
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        tracing::debug!(key, path = %self.path.display(), "Removing value");
        self.update(|document| {
            document.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn set_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let store = FileKeyValueStore::new(&path);

        store.set("flag", json!(true)).unwrap();

        assert!(path.exists());
        assert_eq!(store.get("flag").unwrap(), Some(json!(true)));
    }

    #[test]
    fn values_survive_new_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        FileKeyValueStore::new(&path)
            .set("blockedUserIds", json!([3, 1]))
            .unwrap();

        let reopened = FileKeyValueStore::new(&path);
        assert_eq!(reopened.get("blockedUserIds").unwrap(), Some(json!([3, 1])));
    }

    #[test]
    fn writes_keep_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("storage.json"));

        store.set("a", json!(1)).unwrap();
        store.set("b", json!(2)).unwrap();
        store.remove("a").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap(), Some(json!(2)));
    }

    #[test]
    fn corrupted_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileKeyValueStore::new(&path);
        assert!(matches!(
            store.get("a"),
            Err(StorageError::Corrupted { .. })
        ));
    }

    #[test]
    fn write_replaces_corrupted_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileKeyValueStore::new(&path);
        store.set("blockedUserIds", json!([7])).unwrap();
        store.set("flag", json!(true)).unwrap();

        assert_eq!(store.get("blockedUserIds").unwrap(), Some(json!([7])));
        assert_eq!(store.get("flag").unwrap(), Some(json!(true)));
    }
}
