//! Locally blocked users.
//!
//! Blocking is device-local: the ids are stored as one integer set and
//! content written by those users is filtered out after every fetch.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::error::StorageError;
use super::kv::{KeyValueStore, KeyValueStoreExt};
use crate::domain::Tip;

const BLOCKED_USER_IDS_KEY: &str = "blockedUserIds";

#[derive(Clone)]
pub struct BlockList {
    storage: Arc<dyn KeyValueStore>,
}

impl BlockList {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Blocked ids. An unreadable set is treated as empty.
    fn load(&self) -> BTreeSet<i64> {
        match self.storage.get_int_set(BLOCKED_USER_IDS_KEY) {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read block list, treating it as empty");
                BTreeSet::new()
            }
        }
    }

    pub fn is_blocked(&self, user_id: i64) -> bool {
        self.load().contains(&user_id)
    }

    /// Sorted ids of every blocked user.
    pub fn blocked_ids(&self) -> Vec<i64> {
        self.load().into_iter().collect()
    }

    pub fn block(&self, user_id: i64) -> Result<(), StorageError> {
        let mut ids = self.load();
        if ids.insert(user_id) {
            self.storage.set_int_set(BLOCKED_USER_IDS_KEY, &ids)?;
            tracing::info!(user_id, "User blocked");
        }
        Ok(())
    }

    pub fn unblock(&self, user_id: i64) -> Result<(), StorageError> {
        let mut ids = self.load();
        if ids.remove(&user_id) {
            self.storage.set_int_set(BLOCKED_USER_IDS_KEY, &ids)?;
            tracing::info!(user_id, "User unblocked");
        }
        Ok(())
    }

    /// Drop tips written by blocked users, keeping the order of the rest.
    /// The set is read once, so one listing is filtered consistently.
    pub fn filter_tips(&self, tips: Vec<Tip>) -> Vec<Tip> {
        let blocked = self.load();
        if blocked.is_empty() {
            return tips;
        }
        tips.into_iter()
            .filter(|tip| !blocked.contains(&tip.writer_id))
            .collect()
    }
}
