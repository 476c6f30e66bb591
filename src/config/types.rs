use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub app: AppConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the EveryTip API (scheme + host, no trailing path).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Local persistence settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file path. Defaults to `<data dir>/everytip/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Keep everything in memory; nothing survives the process.
    #[serde(default)]
    pub in_memory: bool,
}

/// Application metadata shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version string displayed in the "my info" menu.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_base_url() -> String {
    "https://api.everytip.co.kr".to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}
