use crate::engine::{DecisionReason, RedirectDecision, RequestInfo, Scheme};
use crate::policy::Policy;

/// Query parameter consulted for dynamic redirects.
pub const REDIRECT_PARAM: &str = "redirect";

/// Evaluate one request against the policy.
///
/// Total and side-effect free: every input maps to a decision, including
/// degenerate ones, so a malformed request can never take the request path
/// down. Rules run in order, first match wins:
///
/// 1. HTTPS enforcement
/// 2. Canonical host enforcement (covers raw-IP access)
/// 3. Fixed path rewrite
/// 4. Whitelisted dynamic redirect
pub fn decide(request: &RequestInfo, policy: &Policy) -> RedirectDecision {
    match evaluate(request, policy) {
        Some((target_url, reason)) => {
            tracing::debug!(
                reason = reason.as_str(),
                target = %target_url,
                host = %request.host,
                path = %request.path,
                "redirect"
            );
            RedirectDecision::redirect(target_url)
        }
        None => RedirectDecision::NoRedirect,
    }
}

fn evaluate(request: &RequestInfo, policy: &Policy) -> Option<(String, DecisionReason)> {
    // HTTPS first, so no later rule can ever emit a plaintext target.
    if policy.enforce_https() && request.scheme != Scheme::Https {
        return Some((
            policy.https_url(&request.path),
            DecisionReason::EnforceHttps,
        ));
    }

    // Anything that is not the canonical host, raw IP literals included,
    // gets sent home. Empty hosts fail the comparison and land here too.
    // Ports are ignored on both sides so a policy host of "example.com:8443"
    // does not redirect its own traffic forever.
    if !request
        .host_without_port()
        .eq_ignore_ascii_case(strip_port(policy.canonical_host()))
    {
        return Some((
            policy.https_url(&request.path),
            DecisionReason::NonCanonicalHost,
        ));
    }

    if let Some(target) = policy.rewrite_for(&request.path) {
        return Some((policy.https_url(target), DecisionReason::FixedRewrite));
    }

    // The query value is a lookup key only. Values missing from the
    // whitelist are dropped, never echoed into a target URL.
    if let Some(value) = request.query.get(REDIRECT_PARAM)
        && let Some(target) = policy.whitelisted(value)
    {
        return Some((
            policy.https_url(target),
            DecisionReason::WhitelistedRedirect,
        ));
    }

    None
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((h, port)) if port.chars().all(|c| c.is_ascii_digit()) => h,
        _ => host,
    }
}
