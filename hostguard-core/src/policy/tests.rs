use crate::policy::{Policy, PolicyError};
use std::collections::BTreeMap;

fn rewrites(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn canonical_host_is_lowercased() {
    // Arrange / Act
    let policy = Policy::new("Example.COM", true, BTreeMap::new(), BTreeMap::new())
        .expect("valid policy");

    // Assert
    assert_eq!(policy.canonical_host(), "example.com");
}

#[test]
fn empty_canonical_host_is_rejected() {
    let result = Policy::new("   ", true, BTreeMap::new(), BTreeMap::new());

    assert!(matches!(result, Err(PolicyError::EmptyCanonicalHost)));
}

#[test]
fn canonical_host_must_not_be_a_url() {
    let result = Policy::new(
        "https://example.com",
        true,
        BTreeMap::new(),
        BTreeMap::new(),
    );

    assert!(matches!(
        result,
        Err(PolicyError::InvalidCanonicalHost { .. })
    ));
}

#[test]
fn whitelist_target_must_be_relative_path() {
    // Arrange
    let whitelist = rewrites(&[("partner", "https://evil.example")]);

    // Act
    let result = Policy::new("example.com", true, BTreeMap::new(), whitelist);

    // Assert
    assert!(matches!(result, Err(PolicyError::UnsafeTarget { .. })));
}

#[test]
fn protocol_relative_target_is_rejected() {
    let whitelist = rewrites(&[("partner", "//evil.example/landing")]);

    let result = Policy::new("example.com", true, BTreeMap::new(), whitelist);

    assert!(matches!(result, Err(PolicyError::UnsafeTarget { .. })));
}

#[test]
fn backslash_target_is_rejected() {
    let rewrites = rewrites(&[("/old", "/\\evil.example")]);

    let result = Policy::new("example.com", true, rewrites, BTreeMap::new());

    assert!(matches!(result, Err(PolicyError::UnsafeTarget { .. })));
}

#[test]
fn chained_rewrite_is_rejected() {
    // /a -> /b -> /c would need two redirect hops.
    let chained = rewrites(&[("/a", "/b"), ("/b", "/c")]);

    let result = Policy::new("example.com", true, chained, BTreeMap::new());

    assert!(matches!(result, Err(PolicyError::ChainedRewrite { .. })));
}

#[test]
fn whitelist_target_must_not_be_a_rewrite_key() {
    let fixed = rewrites(&[("/old", "/new")]);
    let whitelist = rewrites(&[("legacy", "/old")]);

    let result = Policy::new("example.com", true, fixed, whitelist);

    assert!(matches!(result, Err(PolicyError::ChainedRewrite { .. })));
}

#[test]
fn https_url_clamps_degenerate_paths_to_root() {
    let policy = Policy::new("example.com", true, BTreeMap::new(), BTreeMap::new())
        .expect("valid policy");

    assert_eq!(policy.https_url(""), "https://example.com/");
    assert_eq!(policy.https_url("no-slash"), "https://example.com/");
    assert_eq!(policy.https_url("/docs"), "https://example.com/docs");
}
