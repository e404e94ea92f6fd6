//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod resolve;
pub(crate) mod visit;

use std::path::PathBuf;

use clap::Args;
use docsite_config::{CliSettings, RoutingMode, SiteConfig};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use config::ConfigCommandArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use visit::VisitArgs;

/// Configuration arguments shared by commands that load `docsite.toml`.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long, env = "DOCSITE_CONFIG")]
    config: Option<PathBuf>,

    /// Routing mode: hash or history (overrides config).
    #[arg(long)]
    routing_mode: Option<RoutingMode>,

    /// Routing base path (overrides config).
    #[arg(long)]
    base_path: Option<String>,

    /// Repository URL (overrides config).
    #[arg(long)]
    repo: Option<String>,
}

impl ConfigArgs {
    /// Load and validate the configuration with CLI overrides applied.
    pub(crate) fn load(self) -> Result<SiteConfig, CliError> {
        let cli_settings = CliSettings {
            routing_mode: self.routing_mode,
            base_path: self.base_path,
            repo: self.repo,
        };
        Ok(SiteConfig::load(
            self.config.as_deref(),
            Some(&cli_settings),
        )?)
    }
}
