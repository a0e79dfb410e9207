//! Tests for the show-config CLI command and config file loading

use crate::common::create_test_services;
use primegen::cli::commands::config::{execute, ConfigArgs};
use primegen::cli::OutputFormat;
use primegen::core::config::{Config, LogFormat};
use serial_test::serial;
use std::env;
use tempfile::TempDir;

/// Test showing config (human format)
#[tokio::test]
async fn test_show_config_human() {
    let services = create_test_services();

    let result = execute(ConfigArgs { all: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show config should succeed");
}

/// Test showing config (JSON format)
#[tokio::test]
async fn test_show_config_json() {
    let services = create_test_services();

    let result = execute(ConfigArgs { all: false }, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Show config (JSON) should succeed");
}

/// Test showing config with the lookup path
#[tokio::test]
async fn test_show_config_all() {
    let services = create_test_services();

    let result = execute(ConfigArgs { all: true }, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show all config should succeed");
}

/// Test loading an explicit config file with environment overrides on top
#[test]
#[serial]
fn test_load_from_primegen_config() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("primegen.toml");
    std::fs::write(
        &path,
        "[server]\nhost = \"0.0.0.0\"\nport = 3000\n\n[logging]\nformat = \"json\"\n",
    )
    .expect("Failed to write config");

    env::set_var("PRIMEGEN_CONFIG", &path);
    env::set_var("PRIMEGEN_PORT", "3001");

    let config = Config::load().expect("Config should load");

    env::remove_var("PRIMEGEN_CONFIG");
    env::remove_var("PRIMEGEN_PORT");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3001);
    assert_eq!(config.logging.format, LogFormat::Json);
}

/// Test that an invalid config file is reported
#[test]
#[serial]
fn test_load_rejects_invalid_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[server\nport = ").expect("Failed to write config");

    env::set_var("PRIMEGEN_CONFIG", &path);
    let result = Config::load();
    env::remove_var("PRIMEGEN_CONFIG");

    assert!(result.is_err(), "Malformed TOML should fail to load");
}

/// Test that a missing explicit config file is reported
#[test]
#[serial]
fn test_load_rejects_missing_file() {
    env::set_var("PRIMEGEN_CONFIG", "/nonexistent/primegen.toml");
    let result = Config::load();
    env::remove_var("PRIMEGEN_CONFIG");

    let err = result.expect_err("Missing config file should fail");
    assert!(err.is_bad_request());
}

/// Test generating a completion script
#[test]
fn test_completions_bash() {
    use clap_complete::Shell;
    use primegen::cli::commands::completions::{execute as execute_completions, CompletionsArgs};

    let result = execute_completions(CompletionsArgs { shell: Shell::Bash });
    assert!(result.is_ok(), "Completions should succeed");
}
