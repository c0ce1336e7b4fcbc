//! Tests for the paperdrop configuration system.

use std::sync::Mutex;

use paperdrop_core::config::{CliOverrides, PaperdropConfig};
use paperdrop_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all PAPERDROP_ env vars to prevent cross-test contamination.
fn clear_paperdrop_env_vars() {
    for key in [
        "PAPERDROP_PDF_DIR",
        "PAPERDROP_RM_TARGET_DIR",
        "PAPERDROP_RMAPI_BIN",
        "PAPERDROP_RM_USER",
        "PAPERDROP_RM_PASS",
        "PAPERDROP_GS_BIN",
        "PAPERDROP_RETENTION_DAYS",
        "PAPERDROP_BIND",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_paperdrop_env_vars();

    let dir = tempdir();
    let config = PaperdropConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.storage.effective_pdf_dir().to_str(), Some("/app/pdfs"));
    assert_eq!(config.remote.effective_target_dir(), "/");
    assert_eq!(config.remote.effective_binary(), "rmapi");
    assert_eq!(config.converter.effective_binary(), "gs");
    assert_eq!(config.converter.effective_quality_profile(), "ebook");
    assert_eq!(config.retention.effective_window_days(), 7);
    assert_eq!(config.server.effective_bind(), "0.0.0.0:8000");
    assert_eq!(config.server.effective_webhook_path(), "/webhook");
    assert!(config.fetch.effective_user_agent().starts_with("Mozilla/5.0"));
    assert!(config.remote.credentials().is_none());
}

#[test]
fn layered_resolution_cli_over_env_over_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_paperdrop_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("paperdrop.toml"),
        r#"
[storage]
pdf_dir = "/srv/pdfs"

[remote]
target_dir = "/Newspapers"

[retention]
window_days = 14

[server]
bind = "127.0.0.1:9000"
"#,
    )
    .unwrap();

    std::env::set_var("PAPERDROP_RETENTION_DAYS", "3");
    std::env::set_var("PAPERDROP_BIND", "127.0.0.1:9100");

    let cli = CliOverrides {
        bind: Some("127.0.0.1:9200".into()),
        ..Default::default()
    };
    let config = PaperdropConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.storage.effective_pdf_dir().to_str(), Some("/srv/pdfs"));
    assert_eq!(config.remote.effective_target_dir(), "/Newspapers");
    assert_eq!(config.retention.effective_window_days(), 3);
    assert_eq!(config.server.effective_bind(), "127.0.0.1:9200");

    clear_paperdrop_env_vars();
}

#[test]
fn unparseable_env_number_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_paperdrop_env_vars();

    std::env::set_var("PAPERDROP_RETENTION_DAYS", "a week");
    let config = PaperdropConfig::load(tempdir().path(), None).unwrap();
    assert_eq!(config.retention.effective_window_days(), 7);

    clear_paperdrop_env_vars();
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_paperdrop_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("paperdrop.toml"), "this is not valid toml {{{{").unwrap();

    match PaperdropConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn explicit_config_path_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_paperdrop_env_vars();

    let dir = tempdir();
    let cli = CliOverrides {
        config_path: Some(dir.path().join("nope.toml")),
        ..Default::default()
    };
    assert!(matches!(
        PaperdropConfig::load(dir.path(), Some(&cli)),
        Err(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn bad_bind_address_fails_validation() {
    let config = PaperdropConfig::from_toml("[server]\nbind = \"not-an-address\"\n").unwrap();
    match PaperdropConfig::validate(&config).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "server.bind"),
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn webhook_path_must_be_absolute() {
    let config = PaperdropConfig::from_toml("[server]\nwebhook_path = \"hook\"\n").unwrap();
    assert!(matches!(
        PaperdropConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn credentials_need_both_halves_and_are_redacted() {
    let config = PaperdropConfig::from_toml(
        "[remote]\nuser = \"reader@example.com\"\npassword = \"hunter2\"\n",
    )
    .unwrap();
    assert_eq!(
        config.remote.credentials(),
        Some(("reader@example.com", "hunter2"))
    );
    let debug = format!("{:?}", config.remote);
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("[REDACTED]"));

    let half = PaperdropConfig::from_toml("[remote]\nuser = \"reader\"\n").unwrap();
    assert!(half.remote.credentials().is_none());
}

#[test]
fn cli_args_are_parsed_in_both_forms() {
    let cli = CliOverrides::from_args(
        ["--config", "/etc/paperdrop.toml", "--bind=127.0.0.1:1"]
            .into_iter()
            .map(String::from),
    );
    assert_eq!(
        cli.config_path.as_deref().and_then(|p| p.to_str()),
        Some("/etc/paperdrop.toml")
    );
    assert_eq!(cli.bind.as_deref(), Some("127.0.0.1:1"));
}

#[test]
fn toml_round_trip_keeps_overrides() {
    let config = PaperdropConfig::from_toml("[retention]\nwindow_days = 30\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = PaperdropConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.retention.effective_window_days(), 30);
}
