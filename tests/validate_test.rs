use std::io::Write;
use std::path::Path;
use std::time::Duration;

use sessionguard::model::validation::ValidationError;
use sessionguard::{check_file, Report};

fn write_config(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create config");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    path
}

fn check_yaml(content: &str) -> Report {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(dir.path(), "configuration.yml", content);
    check_file(&path).expect("Failed to load config")
}

#[test]
fn test_minimal_config_gets_defaults() {
    let report = check_yaml("session:\n  domain: example.com\n");
    assert!(!report.validator.has_errors());
    assert_eq!("sessionguard_session", report.session.name);
    let timings = report.session_config().expect("no timings");
    assert_eq!(Duration::from_secs(3600), timings.expiration);
    assert_eq!(Duration::from_secs(300), timings.inactivity);
}

#[test]
fn test_redis_config_errors() {
    let report = check_yaml(
        r#"
session:
  domain: "*.example.com"
  expiration: forever
  redis:
    host: cache
    port: 0
"#,
    );
    let errors = report.validator.errors();
    assert_eq!(4, errors.len());
    assert!(matches!(errors[0], ValidationError::SecretRequired { .. }));
    assert!(matches!(errors[1], ValidationError::PortZero));
    assert!(matches!(errors[2], ValidationError::DurationParse { .. }));
    assert!(matches!(errors[3], ValidationError::DomainWildcard));
    assert_eq!("forever", report.session.expiration);
    assert!(report.session_config().is_none());
}

#[test]
fn test_sentinel_config_ok() {
    let report = check_yaml(
        r#"
session:
  domain: example.com
  secret: insecure
  redis:
    sentinel: mymaster
    port: 70000
"#,
    );
    assert!(!report.validator.has_errors());
    assert!(report.session_config().is_some());
}

#[test]
fn test_json_socket_config_ok() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(
        dir.path(),
        "configuration.json",
        r#"{"session": {"domain": "example.com", "secret": "s", "inactivity": "90",
            "redis": {"host": "/var/run/redis.sock"}}}"#,
    );
    let report = check_file(&path).expect("Failed to load config");
    assert!(!report.validator.has_errors());
    let timings = report.session_config().expect("no timings");
    assert_eq!(Duration::from_secs(90), timings.inactivity);
}

#[test]
fn test_unknown_keys_are_warnings() {
    let report = check_yaml("session:\n  domain: example.com\n  same_site: lax\n");
    assert!(!report.validator.has_errors());
    assert!(report.validator.has_warnings());
    assert_eq!(
        "unknown configuration key: session.same_site",
        report.validator.warnings()[0].to_string()
    );
}

#[test]
fn test_large_port_reported_with_other_errors() {
    let report = check_yaml(
        r#"
session:
  domain: "*.example.com"
  secret: s
  redis:
    host: cache
    port: 3000000000
"#,
    );
    let errors: Vec<String> = report
        .validator
        .errors()
        .iter()
        .map(|e| e.to_string())
        .collect();
    assert_eq!(
        vec![
            "The port must be between 1 and 65535 for the redis session provider",
            "The domain of the session must be the root domain you're protecting instead of a wildcard domain",
        ],
        errors
    );
}

#[test]
fn test_clean_config_has_no_warnings() {
    let report = check_yaml("session:\n  domain: example.com\n  secret: s\n");
    assert!(!report.validator.has_errors());
    assert!(!report.validator.has_warnings());
}
