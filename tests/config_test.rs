//! Configuration file loading
//! Run with: cargo test --test config_test

use std::io::Write;

use mc_assistant::application::errors::ConfigError;
use mc_assistant::infrastructure::config::{Config, LogFormat};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  host: 127.0.0.1\n  port: 8181\nlogging:\n  format: json").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8181");
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = Config::default();
    config.chat.history_window = 3;
    config.save(&path).unwrap();

    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn test_missing_file_is_an_error_for_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_garbage_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server: [1, 2").unwrap();
    assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse(_))));
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::resolve(dir.path().join("absent.yaml")).unwrap();
    assert_eq!(config.chat.history_window, 6);
    assert!(config.validate().is_ok());
}

#[test]
fn test_resolve_reads_existing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "chat:\n  history-window: 2").unwrap();
    let config = Config::resolve(file.path()).unwrap();
    assert_eq!(config.chat.history_window, 2);
}
