use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::StorageError;

/// Persisted key-value storage. No transactionality is assumed: every call
/// is a short synchronous operation, and concurrent writers of the same key
/// resolve as last-writer-wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed helpers on top of [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key)? {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| StorageError::InvalidValue {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    fn set_as<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let value = serde_json::to_value(value).map_err(|source| StorageError::InvalidValue {
            key: key.to_string(),
            source,
        })?;
        self.set(key, value)
    }

    /// Integer set stored as a JSON array. A missing key is an empty set.
    fn get_int_set(&self, key: &str) -> Result<BTreeSet<i64>, StorageError> {
        Ok(self
            .get_as::<Vec<i64>>(key)?
            .unwrap_or_default()
            .into_iter()
            .collect())
    }

    fn set_int_set(&self, key: &str, ids: &BTreeSet<i64>) -> Result<(), StorageError> {
        let ids: Vec<i64> = ids.iter().copied().collect();
        self.set_as(key, &ids)
    }

    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.get_as(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}
