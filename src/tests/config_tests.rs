//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, KeypathConfig, RouteEntry, Validate};
use crate::error::config::ConfigError;
use crate::routes::RouteTable;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = KeypathConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = KeypathConfig::default();

    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.routes.separator.clear();
    assert!(config.validate().is_err());
}

/// Test loading routes from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "routes.toml",
            r#"
            [routes]
            separator = "."

            [[routes.entries]]
            path = "db.query"
            value = "run a query"

            [log]
            level = "error"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.routes.separator, ".");
    assert_eq!(config.log.level, "error");
    assert!(config
        .routes
        .entries
        .contains(&RouteEntry::new("db.query", "run a query")));

    // Values not in the file keep their defaults
    assert!(config.routes.trim_segments);

    let table = RouteTable::from_config(&config.routes);
    assert_eq!(table.find("db.query.users").unwrap(), "run a query");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "routes.json",
            r#"{ "routes": { "entries": [ { "path": "a/b", "value": "ab" } ] } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();

    let table = RouteTable::from_config(&config.routes);
    assert_eq!(table.get("a/b").unwrap(), "ab");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("env.toml", "[log]\nlevel = \"info\"\n")
        .unwrap();

    fixture.set_env("TEST_ENV__LOG__LEVEL", "trace");
    fixture.set_env("TEST_ENV__ROUTES__SEPARATOR", ":");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV")
        .load()
        .unwrap();

    assert_eq!(config.log.level, "trace");
    assert_eq!(config.routes.separator, ":");
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[routes\nseparator = \"/")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a file failing validation is rejected after loading.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("bad_level.toml", "[log]\nlevel = \"chatty\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BAD_LEVEL");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test that unknown file extensions are refused.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_file("routes.txt", "").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that the generated default configuration loads back unchanged.
#[test]
fn test_default_config_round_trips_through_file() {
    let fixture = TestFixture::new().unwrap();
    let rendered = toml::to_string_pretty(&KeypathConfig::default()).unwrap();
    let config_path = fixture.create_file("default.toml", rendered).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_DEFAULT")
        .load()
        .unwrap();
    let table = RouteTable::from_config(&config.routes);

    assert_eq!(table.find("user/add/bob").unwrap(), "add a user");
    assert_eq!(table.find("unknown").unwrap(), "keypath");
}
