//! Configuration tests

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the serialized default config parses back to the same values.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    assert_eq!(Config::resolve(parsed.unwrap(), no_env), config);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.use_theme_background = false;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Never;
    config.logging.file_prefix = "form".to_string();

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(Config::resolve(parsed, no_env), config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_uses_defaults() {
    assert_eq!(
        Config::resolve(FileConfig::default(), no_env),
        Config::default()
    );
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "light"

[logging]
file_dir = "/var/log/form"
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> =
        HashMap::from([(ENV_THEME, "dracula"), (ENV_LOG_DIR, "/tmp/form-logs")]);
    let config = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.theme, "dracula");
    assert_eq!(config.logging.file_dir, PathBuf::from("/tmp/form-logs"));
}

#[test]
fn test_partial_logging_section_keeps_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
level = "warn"
file_rotation = "HOURLY"
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_prefix, "contact-form");
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let parsed: Result<FileConfig, _> = toml::from_str("min_first_name = 3\ntheme = \"nord\"");
    assert_eq!(parsed.unwrap().theme.as_deref(), Some("nord"));
}
