use dhcid_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.record.ttl, 600);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = Config::load(None, CliOverrides::default()).unwrap();

    assert_eq!(config.record.ttl, 600);
}

#[test]
fn test_log_level_override() {
    let overrides = CliOverrides {
        log_level: Some("debug".to_string()),
    };

    let config = Config::load(None, overrides).unwrap();

    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_from_toml_partial_sections() {
    let config = Config::from_toml(
        r#"
        [record]
        ttl = 3600
    "#,
    )
    .unwrap();

    assert_eq!(config.record.ttl, 3600);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_from_toml_empty_document() {
    let config = Config::from_toml("").unwrap();

    assert_eq!(config.record.ttl, 600);
}

#[test]
fn test_from_toml_rejects_wrong_type() {
    let result = Config::from_toml(
        r#"
        [record]
        ttl = "ten minutes"
    "#,
    );

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validate_rejects_zero_ttl() {
    let mut config = Config::default();
    config.record.ttl = 0;

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[record]\nttl = 120\n\n[logging]\nlevel = \"info\"").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let config = Config::load(Some(&path), CliOverrides::default()).unwrap();

    assert_eq!(config.record.ttl, 120);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_missing_file() {
    let result = Config::load(
        Some("/nonexistent/dhcid/config.toml"),
        CliOverrides::default(),
    );

    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
