use std::sync::Arc;

use super::error::StorageError;
use super::kv::{KeyValueStore, KeyValueStoreExt};

const RECENT_KEYWORDS_KEY: &str = "recentKeywords";
const MAX_RECENT_KEYWORDS: usize = 10;

/// Search history, most recent first, without duplicates.
#[derive(Clone)]
pub struct RecentKeywords {
    storage: Arc<dyn KeyValueStore>,
}

impl RecentKeywords {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Vec<String> {
        match self.storage.get_as::<Vec<String>>(RECENT_KEYWORDS_KEY) {
            Ok(keywords) => keywords.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read recent keywords");
                Vec::new()
            }
        }
    }

    /// Move `keyword` to the front and return the updated list.
    pub fn record(&self, keyword: &str) -> Result<Vec<String>, StorageError> {
        let keyword = keyword.trim();
        let mut keywords = self.load();
        keywords.retain(|k| k != keyword);
        keywords.insert(0, keyword.to_string());
        keywords.truncate(MAX_RECENT_KEYWORDS);
        self.storage.set_as(RECENT_KEYWORDS_KEY, &keywords)?;
        Ok(keywords)
    }

    pub fn remove(&self, keyword: &str) -> Result<Vec<String>, StorageError> {
        let mut keywords = self.load();
        keywords.retain(|k| k != keyword);
        self.storage.set_as(RECENT_KEYWORDS_KEY, &keywords)?;
        Ok(keywords)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(RECENT_KEYWORDS_KEY)
    }
}
