use anyhow::Context;
use hostguard_core::conf::load_policy;
use hostguard_core::engine::{RequestInfo, decide};
use std::path::PathBuf;

pub fn eval(config: PathBuf, url: &str) -> anyhow::Result<()> {
    let policy = load_policy(&config)
        .with_context(|| format!("failed to load policy from {}", config.display()))?;

    let request = RequestInfo::from_url(url)?;

    tracing::debug!(
        host = %request.host,
        scheme = request.scheme.as_str(),
        path = %request.path,
        "evaluating request"
    );

    let decision = decide(&request, &policy);

    println!("{}", serde_json::to_string_pretty(&decision)?);

    Ok(())
}
