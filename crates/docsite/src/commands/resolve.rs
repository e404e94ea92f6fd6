//! `docsite resolve` command implementation.

use clap::Args;
use docsite_config::SiteConfig;
use docsite_paths::AliasRule;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Logical route path to rewrite.
    path: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        match Resolution::of(&config, &self.path) {
            Some(resolution) => {
                output.field("rule", &resolution.label());
                output.data(&resolution.target);
            }
            None => {
                output.info("No alias matched");
                output.data(&self.path);
            }
        }

        Ok(())
    }
}

/// Alias rule that rewrote a path, and the rewritten path.
#[derive(Debug)]
struct Resolution<'a> {
    index: usize,
    rule: &'a AliasRule,
    target: String,
}

impl<'a> Resolution<'a> {
    fn of(config: &'a SiteConfig, path: &str) -> Option<Self> {
        let table = config.alias_table();
        let (index, target) = table.resolve_with_rule(path)?;
        Some(Self {
            index,
            rule: &table.rules()[index],
            target,
        })
    }

    /// One-based rule number and pattern, e.g. `#2 /a/(.*)`.
    fn label(&self) -> String {
        format!("#{} {}", self.index + 1, self.rule.pattern)
    }
}
