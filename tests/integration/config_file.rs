//! Configuration loading from TOML files and environment overrides

use serial_test::serial;
use std::env;
use std::io::Write;
use wpp_analytics_cli::config::AppConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
#[serial]
fn test_load_from_file() {
    let file = write_config(
        r#"
[graph_api]
base_url = "http://localhost:8080"
version = "v21.0"

[display]
timezone = "Europe/Lisbon"
"#,
    );

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.graph_api.base_url, "http://localhost:8080");
    assert_eq!(config.graph_api.version, "v21.0");
    assert_eq!(config.display.timezone, "Europe/Lisbon");
}

#[test]
#[serial]
fn test_partial_file_keeps_defaults() {
    let file = write_config("[display]\ntimezone = \"UTC\"\n");

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.graph_api.base_url, "https://graph.facebook.com");
    assert_eq!(config.graph_api.version, "v23.0");
    assert_eq!(config.display.timezone, "UTC");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let file = write_config("[graph_api]\nversion = \"v21.0\"\n");
    env::set_var("GRAPH_API_VERSION", "v24.0");
    env::set_var("WPP_DEFAULT_TIMEZONE", "Asia/Tokyo");

    let config = AppConfig::load(Some(file.path()));

    env::remove_var("GRAPH_API_VERSION");
    env::remove_var("WPP_DEFAULT_TIMEZONE");

    let config = config.unwrap();
    assert_eq!(config.graph_api.version, "v24.0");
    assert_eq!(config.display.timezone, "Asia/Tokyo");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(AppConfig::load(Some(&missing)).is_err());
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    let file = write_config("[graph_api\nbase_url = ");
    assert!(AppConfig::load(Some(file.path())).is_err());
}
