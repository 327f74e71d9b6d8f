use ferrous_doh_domain::config::transport::DEFAULT_DOH_ENDPOINT;
use ferrous_doh_domain::{CliOverrides, Config, ConfigError, LabelPolicy};
use std::io::Write;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.transport.endpoint, DEFAULT_DOH_ENDPOINT);
    assert_eq!(config.transport.timeout, 10);
    assert!(!config.transport.allow_insecure);
    assert_eq!(config.encoding.label_policy, LabelPolicy::Wire);
    assert_eq!(config.logging.level, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let toml_str = r#"
        [transport]
        endpoint = "https://dns.google/dns-query"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.transport.endpoint, "https://dns.google/dns-query");
    assert_eq!(config.transport.timeout, 10);
    assert_eq!(config.encoding.label_policy, LabelPolicy::Wire);
}

#[test]
fn test_config_label_policy_from_toml() {
    let toml_str = r#"
        [encoding]
        label_policy = "rfc1035"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.encoding.label_policy, LabelPolicy::Rfc1035);
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[transport]
endpoint = "https://cloudflare-dns.com/dns-query"
timeout = 3

[logging]
level = "debug"
"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let config = Config::load(Some(path), CliOverrides::default()).unwrap();

    assert_eq!(
        config.transport.endpoint,
        "https://cloudflare-dns.com/dns-query"
    );
    assert_eq!(config.transport.timeout, 3);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load(
        Some("/nonexistent/ferrous-doh.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(..))));
}

#[test]
fn test_config_load_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[transport\nendpoint = ").unwrap();

    let path = file.path().to_str().unwrap();
    let result = Config::load(Some(path), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_cli_overrides_win_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[transport]
endpoint = "https://dns.google/dns-query"
"#
    )
    .unwrap();

    let overrides = CliOverrides {
        endpoint: Some("https://dns.quad9.net/dns-query".to_string()),
        timeout: Some(2),
        strict_labels: true,
        log_level: Some("trace".to_string()),
    };

    let path = file.path().to_str().unwrap();
    let config = Config::load(Some(path), overrides).unwrap();

    assert_eq!(config.transport.endpoint, "https://dns.quad9.net/dns-query");
    assert_eq!(config.transport.timeout, 2);
    assert_eq!(config.encoding.label_policy, LabelPolicy::Rfc1035);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_validate_rejects_plain_http() {
    let mut config = Config::default();
    config.transport.endpoint = "http://127.0.0.1:8053/dns-query".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    config.transport.allow_insecure = true;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_other_schemes() {
    let mut config = Config::default();
    config.transport.endpoint = "udp://8.8.8.8:53".to_string();
    config.transport.allow_insecure = true;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_query_string() {
    let mut config = Config::default();
    config.transport.endpoint = "https://dns.google/dns-query?ct".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.transport.timeout = 0;
    assert!(config.validate().is_err());
}
