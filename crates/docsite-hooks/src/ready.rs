//! Startup confirmation.

use docsite_config::{RoutingMode, SiteConfig};

use crate::hook::Hook;

/// Fields logged when the renderer reports ready.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadySummary {
    pub name: String,
    pub routing_mode: RoutingMode,
    pub base_path: String,
    pub alias_count: usize,
    pub hook_count: usize,
}

impl ReadySummary {
    pub fn of(config: &SiteConfig) -> Self {
        Self {
            name: config.site.name.clone(),
            routing_mode: config.routing.mode,
            base_path: config.routing.base_path.clone(),
            alias_count: config.alias_table().len(),
            hook_count: config.hooks.enabled.len(),
        }
    }
}

/// Logs that the site finished loading, with a summary of the active config.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadyHook;

impl Hook for ReadyHook {
    fn name(&self) -> &'static str {
        "ready"
    }

    fn ready(&self, config: &SiteConfig) {
        let summary = ReadySummary::of(config);
        tracing::info!(
            name = %summary.name,
            routing_mode = %summary.routing_mode,
            base_path = %summary.base_path,
            aliases = summary.alias_count,
            hooks = summary.hook_count,
            "Site ready"
        );
        tracing::debug!(?config, "Active configuration");
    }
}
