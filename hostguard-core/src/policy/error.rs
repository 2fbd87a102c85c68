use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    // Canonical host
    #[error("canonical_host must not be empty")]
    EmptyCanonicalHost,

    #[error("canonical_host '{host}' must be a bare host, not a URL")]
    InvalidCanonicalHost { host: String },

    // Redirect targets
    #[error("redirect target for '{key}' is not a same-site relative path: '{target}'")]
    UnsafeTarget { key: String, target: String },

    #[error("redirect target for '{key}' is itself a rewritten path: '{target}'")]
    ChainedRewrite { key: String, target: String },
}

impl PolicyError {
    pub fn unsafe_target(key: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnsafeTarget {
            key: key.into(),
            target: target.into(),
        }
    }

    pub fn chained_rewrite(key: impl Into<String>, target: impl Into<String>) -> Self {
        Self::ChainedRewrite {
            key: key.into(),
            target: target.into(),
        }
    }
}
