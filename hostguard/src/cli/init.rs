use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

const STARTER_POLICY: &str = r#"# Hostguard redirect policy.
#
# Every redirect this engine emits is built from the values below; request
# input is only ever used as a lookup key.

# The single domain this service presents itself as. Requests for any other
# host (raw IPs included) are redirected here.
canonical_host = "example.com"

# Upgrade plain-http requests before any other rule runs.
enforce_https = true

# Permanent old-path -> new-path moves.
[fixed_rewrites]
# "/old-blog" = "/blog"

# Accepted `?redirect=` keys and the fixed same-site path each maps to.
# Values must be relative paths; full URLs are rejected at load time.
[whitelist]
# allowed-page1 = "/allowed-page1"
"#;

pub fn init(config: PathBuf) -> Result<()> {
    // Refuse to overwrite an existing file
    if config.exists() {
        bail!("{} already exists", config.display());
    }

    if let Some(parent) = config.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(&config, STARTER_POLICY)
        .with_context(|| format!("failed to write {}", config.display()))?;

    // User feedback
    println!("✔ Initialized Hostguard policy in {}", config.display());
    println!();
    println!("Next steps:");
    println!("  hostguard check {}", config.display());
    println!("  hostguard eval --config {} <url>", config.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostguard_core::conf::load_policy;

    #[test]
    fn starter_policy_is_loadable() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostguard.toml");

        // Act
        init(path.clone()).expect("init");
        let policy = load_policy(&path).expect("starter policy must validate");

        // Assert
        assert_eq!(policy.canonical_host(), "example.com");
        assert!(policy.enforce_https());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostguard.toml");
        std::fs::write(&path, "canonical_host = \"keep.me\"\n").unwrap();

        let result = init(path.clone());

        assert!(result.is_err());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "canonical_host = \"keep.me\"\n"
        );
    }
}
