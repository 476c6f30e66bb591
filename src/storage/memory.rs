use std::collections::HashMap;

use parking_lot::Mutex;
use serde_json::Value;

use super::error::StorageError;
use super::kv::KeyValueStore;

/// In-process storage. Nothing survives the process; used as a test double
/// and when no storage path is configured.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().remove(key);
        Ok(())
    }
}
