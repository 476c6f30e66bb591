//! Thread-safe configuration storage.
//!
//! Provides a simple in-memory config container with interior mutability.
//! Command-line overrides are applied through [`ConfigStore::update`].

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
///
/// Allows multiple readers to access config concurrently while
/// supporting atomic updates when needed.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
}

impl ConfigStore {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Get a clone of the current config.
    ///
    /// This is cheap because Config is Clone.
    /// Multiple readers can call this concurrently.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-memory change, then validate the result.
    ///
    /// On validation failure the previous config is kept.
    pub fn update<F>(&self, apply: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Config),
    {
        let mut guard = self.inner.write();
        let mut next = guard.clone();
        apply(&mut next);
        next.validate()?;
        *guard = next;
        Ok(())
    }
}
