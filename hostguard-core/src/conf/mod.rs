mod error;

#[cfg(test)]
mod tests;

pub use error::*;

use crate::policy::Policy;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// The single domain this service presents itself as, e.g. "example.com"
    pub canonical_host: String,

    /// Upgrade plain-http requests to https before anything else
    #[serde(default = "default_enforce_https")]
    pub enforce_https: bool,

    /// Permanent old-path -> new-path moves
    #[serde(default)]
    pub fixed_rewrites: BTreeMap<String, String>,

    /// Accepted `?redirect=` keys and the fixed same-site path each maps to
    #[serde(default)]
    pub whitelist: BTreeMap<String, String>,
}

fn default_enforce_https() -> bool {
    true
}

impl PolicyConfig {
    pub fn into_policy(self) -> Result<Policy, ConfigError> {
        let policy = Policy::new(
            &self.canonical_host,
            self.enforce_https,
            self.fixed_rewrites,
            self.whitelist,
        )?;

        Ok(policy)
    }
}

impl FromStr for PolicyConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let cfg: Self = toml::from_str(s).context("failed to parse policy config from string")?;

        Ok(cfg)
    }
}

/// Load and validate a policy from a TOML file.
pub fn load_policy(path: &Path) -> Result<Policy, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let cfg: PolicyConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    cfg.into_policy()
}
