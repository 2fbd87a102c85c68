use serde::Serialize;

/// Permanent redirect; the only status this engine ever emits.
pub const REDIRECT_STATUS: u16 = 301;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RedirectDecision {
    NoRedirect,
    Redirect { target_url: String, status_code: u16 },
}

impl RedirectDecision {
    pub(crate) fn redirect(target_url: String) -> Self {
        Self::Redirect {
            target_url,
            status_code: REDIRECT_STATUS,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    pub fn target_url(&self) -> Option<&str> {
        match self {
            Self::Redirect { target_url, .. } => Some(target_url),
            Self::NoRedirect => None,
        }
    }
}

/// Which rule produced a redirect. Logged, never exposed on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecisionReason {
    EnforceHttps,
    NonCanonicalHost,
    FixedRewrite,
    WhitelistedRedirect,
}

impl DecisionReason {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::EnforceHttps => "enforce_https",
            Self::NonCanonicalHost => "non_canonical_host",
            Self::FixedRewrite => "fixed_rewrite",
            Self::WhitelistedRedirect => "whitelisted_redirect",
        }
    }
}
