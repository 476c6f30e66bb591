//! Configuration loading and sensitive value handling.

mod credentials;
mod loader;
mod store;
mod types;

pub use credentials::{LoginCredentials, SecureString};
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, AppConfig, Config, StorageConfig};
