//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// The generated template must parse back into a FileConfig.
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
}

#[test]
fn test_config_roundtrip_with_optional_values() {
    let mut config = Config::default();
    config.endpoint.mode = EndpointMode::Http;
    config.endpoint.feedback_url = Some("https://redmine.example/feedback".to_string());
    config.editor.api_url = Some("https://redmine.example/ai".to_string());
    config.logging.file_rotation = LogRotation::Hourly;

    let toml_str = config.to_toml();
    let file: FileConfig = toml::from_str(&toml_str).expect("should parse");
    let loaded = Config::from_sources(file, |_| None);

    assert_eq!(loaded.endpoint.mode, EndpointMode::Http);
    assert_eq!(
        loaded.endpoint.feedback_url.as_deref(),
        Some("https://redmine.example/feedback")
    );
    assert_eq!(loaded.editor.api_url.as_deref(), Some("https://redmine.example/ai"));
    assert_eq!(loaded.logging.file_rotation, LogRotation::Hourly);
}

/// The API key must never be written into the config file.
#[test]
fn test_api_key_not_serialized() {
    let mut config = Config::default();
    config.editor.api_key = Some("sk-very-secret".to_string());
    assert!(!config.to_toml().contains("sk-very-secret"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_when_empty() {
    let config = Config::from_sources(FileConfig::default(), |_| None);
    assert_eq!(config.theme, "Assist Dark");
    assert_eq!(config.endpoint.mode, EndpointMode::Simulated);
    assert_eq!(config.endpoint.connection_delay_ms, 1500);
    assert_eq!(config.endpoint.feedback_delay_ms, 1000);
    assert_eq!(config.logging.level, "info");
    assert!(config.editor.api_url.is_none());
    assert!(config.editor.api_key.is_none());
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "Assist Light"

[endpoint]
mode = "http"

[editor]
api_url = "https://from-file.example"
"#,
    )
    .unwrap();

    let config = Config::from_sources(
        file,
        env_from(&[
            ("REDMINE_ASSIST_THEME", "Terminal"),
            ("REDMINE_ASSIST_ENDPOINT", "simulated"),
            ("REDMINE_ASSIST_API_URL", "https://from-env.example"),
            ("REDMINE_ASSIST_API_KEY", "k-env"),
        ]),
    );

    assert_eq!(config.theme, "Terminal");
    assert_eq!(config.endpoint.mode, EndpointMode::Simulated);
    assert_eq!(config.editor.api_url.as_deref(), Some("https://from-env.example"));
    assert_eq!(config.editor.api_key.as_deref(), Some("k-env"));
}

#[test]
fn test_unknown_values_fall_back() {
    assert_eq!(EndpointMode::from_str("carrier-pigeon"), EndpointMode::Simulated);
    assert_eq!(EndpointMode::from_str("HTTP"), EndpointMode::Http);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("Hourly"), LogRotation::Hourly);
}

#[test]
fn test_timeout_never_zero() {
    let endpoint = EndpointConfig::from_file(Some(FileEndpoint {
        timeout_secs: Some(0),
        ..Default::default()
    }));
    assert_eq!(endpoint.timeout_secs, 1);
}

#[test]
fn test_log_level_is_normalized() {
    let logging = LoggingConfig::from_file(Some(FileLogging {
        level: Some(" DEBUG ".to_string()),
        ..Default::default()
    }));
    assert_eq!(logging.level, "debug");

    let logging = LoggingConfig::from_file(Some(FileLogging {
        level: Some("verbose".to_string()),
        file_prefix: Some("  ".to_string()),
        ..Default::default()
    }));
    assert_eq!(logging.level, "info");
    assert_eq!(logging.file_prefix, APP_NAME);
}

#[test]
fn test_string_values_are_escaped() {
    let mut config = Config::default();
    config.editor.api_url = Some(r#"https://redmine.example/ai?q="x"&p=C:\tmp"#.to_string());
    config.endpoint.feedback_url = Some("https://redmine.example/fb\"\n# injected".to_string());
    config.theme = r#"Assist "Dark""#.to_string();

    let toml_str = config.to_toml();
    let file: FileConfig = toml::from_str(&toml_str).expect("escaped values should parse");
    let loaded = Config::from_sources(file, |_| None);

    assert_eq!(
        loaded.editor.api_url.as_deref(),
        Some(r#"https://redmine.example/ai?q="x"&p=C:\tmp"#)
    );
    assert_eq!(
        loaded.endpoint.feedback_url.as_deref(),
        Some("https://redmine.example/fb\"\n# injected")
    );
    assert_eq!(loaded.theme, r#"Assist "Dark""#);
}
