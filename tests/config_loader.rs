mod common;

use std::path::PathBuf;

use common::temp_config;
use everytip::config::{Config, ConfigError, ConfigStore};

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://api.everytip.co.kr");
    assert_eq!(config.api.timeout_seconds, 15);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert!(config.storage.path.is_none());
    assert!(!config.storage.in_memory);
    assert_eq!(config.app.version, env!("CARGO_PKG_VERSION"));
    assert!(config.validate().is_ok());
}

#[test]
fn config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("everytip/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let config = Config::load_from(&PathBuf::from("/nonexistent/everytip/config.toml")).unwrap();
    assert_eq!(config.api.base_url, Config::default().api.base_url);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://localhost:9000"

[storage]
in_memory = true
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:9000");
    assert_eq!(config.api.timeout_seconds, 15);
    assert!(config.storage.in_memory);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_http_url_fails_validation() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://example.com\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("ftp://example.com"));
}

#[test]
fn zero_timeout_fails_validation() {
    let mut config = Config::default();
    config.api.timeout_seconds = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn store_update_rejects_invalid_changes() {
    let store = ConfigStore::new(Config::default());

    store
        .update(|c| c.api.base_url = "http://127.0.0.1:8080".to_string())
        .unwrap();
    assert_eq!(store.get().api.base_url, "http://127.0.0.1:8080");

    assert!(store.update(|c| c.api.base_url = "nope".to_string()).is_err());
    assert_eq!(store.get().api.base_url, "http://127.0.0.1:8080");
}
