use crate::policy::PolicyError;
use std::collections::BTreeMap;

/// Immutable redirect policy.
///
/// Built once at startup (or on reload) and treated as read-only for its
/// whole lifetime. Every redirect target the engine emits is assembled from
/// the fields here, never from request input.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    canonical_host: String,
    enforce_https: bool,
    fixed_rewrites: BTreeMap<String, String>,
    whitelist: BTreeMap<String, String>,
}

impl Policy {
    pub fn new(
        canonical_host: &str,
        enforce_https: bool,
        fixed_rewrites: BTreeMap<String, String>,
        whitelist: BTreeMap<String, String>,
    ) -> Result<Self, PolicyError> {
        let canonical_host = canonical_host.trim().to_ascii_lowercase();

        if canonical_host.is_empty() {
            return Err(PolicyError::EmptyCanonicalHost);
        }

        // A host, not a URL: "example.com" or "example.com:8443".
        if canonical_host.contains('/')
            || canonical_host.contains("://")
            || canonical_host.chars().any(char::is_whitespace)
        {
            return Err(PolicyError::InvalidCanonicalHost {
                host: canonical_host,
            });
        }

        for (key, target) in fixed_rewrites.iter().chain(whitelist.iter()) {
            if !is_same_site_path(target) {
                return Err(PolicyError::unsafe_target(key, target));
            }

            // One-hop convergence: a target must never be a rewrite key,
            // otherwise a redirect would land on a path that redirects again.
            if fixed_rewrites.contains_key(target) {
                return Err(PolicyError::chained_rewrite(key, target));
            }
        }

        Ok(Self {
            canonical_host,
            enforce_https,
            fixed_rewrites,
            whitelist,
        })
    }

    pub fn canonical_host(&self) -> &str {
        &self.canonical_host
    }

    pub fn enforce_https(&self) -> bool {
        self.enforce_https
    }

    pub fn rewrite_for(&self, path: &str) -> Option<&str> {
        self.fixed_rewrites.get(path).map(String::as_str)
    }

    pub fn whitelisted(&self, key: &str) -> Option<&str> {
        self.whitelist.get(key).map(String::as_str)
    }

    pub fn rewrite_count(&self) -> usize {
        self.fixed_rewrites.len()
    }

    pub fn whitelist_count(&self) -> usize {
        self.whitelist.len()
    }

    /// Assemble an absolute https URL on the canonical host.
    ///
    /// `path` always comes from trusted policy data or a normalized request
    /// path; degenerate values are clamped to root so the output is always a
    /// well-formed URL.
    pub fn https_url(&self, path: &str) -> String {
        let path = if path.starts_with('/') { path } else { "/" };
        format!("https://{}{}", self.canonical_host, path)
    }
}

/// A target is same-site when it can only ever resolve under the canonical
/// host: an absolute path that is not protocol-relative and cannot smuggle
/// a scheme or a backslash past a lenient client.
fn is_same_site_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.contains("://")
}
