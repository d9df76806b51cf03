//! Configuration loading and layering tests

use isir_cli::config::ConfigManager;
use tempfile::TempDir;

#[test]
fn test_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("missing.toml"));

    let config = manager.load().unwrap();

    assert_eq!(config.network.timeout_seconds, 30);
    assert!(config.oauth.url.is_empty());
    assert!(config.api.root_url.is_empty());
}

#[test]
fn test_config_file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[oauth]
url = "https://login.example.org/wrap"
user_id = "svc-account"
password = "hunter2"
scope = "https://api.example.org/"

[api]
root_url = "https://api.example.org/svc"

[network]
timeout_seconds = 90
"#,
    )
    .unwrap();

    let config = ConfigManager::with_path(path).load().unwrap();

    assert_eq!(config.oauth.url, "https://login.example.org/wrap");
    assert_eq!(config.oauth.credentials.user_id, "svc-account");
    assert_eq!(config.oauth.credentials.password.expose(), "hunter2");
    assert_eq!(config.oauth.scope, "https://api.example.org/");
    assert_eq!(config.api.root_url, "https://api.example.org/svc");
    assert_eq!(config.network.timeout_seconds, 90);
}

#[test]
fn test_cli_timeout_override_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[network]\ntimeout_seconds = 90\n").unwrap();

    let mut config = ConfigManager::with_path(path).load().unwrap();
    config.apply_cli_overrides(Some(5));

    assert_eq!(config.network.timeout_seconds, 5);
}

#[test]
fn test_cli_override_absent_leaves_config_value() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("missing.toml"));

    let mut config = manager.load().unwrap();
    config.apply_cli_overrides(None);

    assert_eq!(config.network.timeout_seconds, 30);
}

#[test]
fn test_loaded_config_debug_never_exposes_the_password() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[oauth]\npassword = \"hunter2\"\n").unwrap();

    let config = ConfigManager::with_path(path).load().unwrap();

    assert!(!format!("{config:?}").contains("hunter2"));
}
