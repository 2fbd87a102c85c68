use crate::conf::{ConfigError, PolicyConfig, load_policy};
use crate::policy::PolicyError;
use std::str::FromStr;

const EXAMPLE: &str = r#"
canonical_host = "example.com"
enforce_https = true

[fixed_rewrites]
"/old-blog" = "/blog"

[whitelist]
allowed-page1 = "/allowed-page1"
"#;

#[test]
fn parses_full_config() {
    // Act
    let cfg = PolicyConfig::from_str(EXAMPLE).expect("valid config");

    // Assert
    assert_eq!(cfg.canonical_host, "example.com");
    assert!(cfg.enforce_https);
    assert_eq!(cfg.fixed_rewrites.len(), 1);
    assert_eq!(cfg.whitelist.len(), 1);
}

#[test]
fn enforce_https_defaults_on() {
    let cfg = PolicyConfig::from_str("canonical_host = \"example.com\"").expect("valid config");

    assert!(cfg.enforce_https);
}

#[test]
fn maps_default_to_empty() {
    let cfg = PolicyConfig::from_str("canonical_host = \"example.com\"").expect("valid config");
    let policy = cfg.into_policy().expect("valid policy");

    assert_eq!(policy.rewrite_count(), 0);
    assert_eq!(policy.whitelist_count(), 0);
}

#[test]
fn unsafe_whitelist_target_fails_conversion() {
    let cfg = PolicyConfig::from_str(
        "canonical_host = \"example.com\"\n[whitelist]\npartner = \"https://partner.example\"",
    )
    .expect("parses");

    let result = cfg.into_policy();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidPolicy(PolicyError::UnsafeTarget { .. }))
    ));
}

#[test]
fn load_policy_reads_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hostguard.toml");
    std::fs::write(&path, EXAMPLE).unwrap();

    // Act
    let policy = load_policy(&path).expect("valid policy file");

    // Assert
    assert_eq!(policy.canonical_host(), "example.com");
    assert_eq!(policy.rewrite_for("/old-blog"), Some("/blog"));
    assert_eq!(policy.whitelisted("allowed-page1"), Some("/allowed-page1"));
}

#[test]
fn load_policy_missing_file_is_a_read_error() {
    let result = load_policy(std::path::Path::new("/non/existent/hostguard.toml"));

    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn load_policy_bad_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hostguard.toml");
    std::fs::write(&path, "canonical_host = [broken").unwrap();

    let result = load_policy(&path);

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
