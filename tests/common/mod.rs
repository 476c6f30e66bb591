//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;
use std::sync::Arc;

use everytip::config::{ApiConfig, Config};
use everytip::storage::{KeyValueStore, MemoryKeyValueStore};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Config pointing at `base_url` with in-memory storage and short timeouts.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    config.storage.in_memory = true;
    config
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn memory_storage() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryKeyValueStore::new())
}

/// Wire form of a tip as the API sends it.
pub fn tip_json(id: i64, writer_id: i64, writer: &str) -> Value {
    json!({
        "id": id,
        "title": format!("tip {}", id),
        "content": "body",
        "writer": { "id": writer_id, "nick_name": writer },
        "created_at": format!("2025-01-{:02}T00:00:00", id),
        "view_count": id * 10,
        "like_count": 100 - id,
    })
}
