use crate::conf::load_policy;
use crate::policy::Policy;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;

/// Shared, hot-swappable policy handle.
///
/// Readers load a snapshot per request; a reload builds and validates the
/// replacement offline and then swaps the pointer. Nothing is ever mutated
/// in place.
pub struct PolicyState {
    current: ArcSwap<Policy>,
}

impl PolicyState {
    pub fn new(policy: Policy) -> Self {
        Self {
            current: ArcSwap::from_pointee(policy),
        }
    }

    pub fn from_file(config_path: &Path) -> Result<Self> {
        let policy = load_policy(config_path)?;
        Ok(Self::new(policy))
    }

    pub fn snapshot(&self) -> Arc<Policy> {
        self.current.load_full()
    }

    /// Re-read the config file and swap in the new policy.
    ///
    /// On any load or validation error the current policy stays in effect.
    pub fn reload(&self, config_path: &Path) -> Result<()> {
        // Parse and validate offline.
        let new_policy = load_policy(config_path)?;

        // Log comparison against the current policy.
        let old = self.current.load();
        tracing::info!(
            old_host = %old.canonical_host(),
            new_host = %new_policy.canonical_host(),
            old_rewrites = old.rewrite_count(),
            new_rewrites = new_policy.rewrite_count(),
            old_whitelist = old.whitelist_count(),
            new_whitelist = new_policy.whitelist_count(),
            "policy reloaded"
        );

        // Atomic swap (point of no return).
        self.current.store(Arc::new(new_policy));

        Ok(())
    }
}
