//! `docsite config` command implementation.

use clap::Args;
use docsite_config::SiteConfig;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the config command.
#[derive(Args)]
pub(crate) struct ConfigCommandArgs {
    /// Print the renderer option object as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ConfigCommandArgs {
    /// Execute the config command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or serialized.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let json = self.json;
        let config = self.config.load()?;

        if json {
            output.data(&renderer_json(&config)?);
            return Ok(());
        }

        for (label, value) in summary_fields(&config) {
            output.field(label, &value);
        }

        output.highlight(&format!("Aliases ({}):", config.aliases().len()));
        for rule in config.aliases() {
            output.info(&format!("  {} -> {}", rule.pattern, rule.replacement));
        }

        Ok(())
    }
}

/// Renderer option object as pretty-printed JSON.
fn renderer_json(config: &SiteConfig) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&config.renderer_options())?)
}

/// Labelled summary lines shown without `--json`.
fn summary_fields(config: &SiteConfig) -> Vec<(&'static str, String)> {
    let file = config
        .config_path
        .as_ref()
        .map_or_else(|| "(defaults)".to_owned(), |path| path.display().to_string());
    let hooks: Vec<&str> = config.hooks.enabled.iter().map(|h| h.as_str()).collect();

    vec![
        ("file", file),
        ("name", config.site.name.clone()),
        ("repo", config.site.repo.clone().unwrap_or_else(|| "-".to_owned())),
        (
            "routing",
            format!("{} {}", config.routing.mode, config.routing.base_path),
        ),
        (
            "edit link",
            config
                .edit_base_url()
                .unwrap_or_else(|| "disabled".to_owned()),
        ),
        ("hooks", hooks.join(", ")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONFIG: &str = r#"
[site]
name = "Tech Notes"
repo = "https://github.com/lzhch/tech-notes"

[routing]
mode = "history"

[[alias]]
pattern = "/z/(.*)"
replacement = "/zz/$1"

[[alias]]
pattern = "/a/(.*)"
replacement = "/aa/$1"

[hooks]
enabled = ["ready", "edit-link"]
"#;

    #[test]
    fn test_renderer_json_matches_renderer_options() {
        let config = SiteConfig::from_toml(CONFIG).unwrap();
        let printed: serde_json::Value =
            serde_json::from_str(&renderer_json(&config).unwrap()).unwrap();

        assert_eq!(printed, serde_json::to_value(config.renderer_options()).unwrap());
        assert_eq!(printed["routerMode"], "history");
    }

    #[test]
    fn test_renderer_json_keeps_alias_order() {
        let config = SiteConfig::from_toml(CONFIG).unwrap();
        let text = renderer_json(&config).unwrap();

        let z = text.find("\"/z/(.*)\"").unwrap();
        let a = text.find("\"/a/(.*)\"").unwrap();
        assert!(z < a);
    }

    #[test]
    fn test_summary_fields() {
        let config = SiteConfig::from_toml(CONFIG).unwrap();
        assert_eq!(
            summary_fields(&config),
            vec![
                ("file", "(defaults)".to_owned()),
                ("name", "Tech Notes".to_owned()),
                ("repo", "https://github.com/lzhch/tech-notes".to_owned()),
                ("routing", "history /".to_owned()),
                (
                    "edit link",
                    "https://github.com/lzhch/tech-notes/blob/main/".to_owned()
                ),
                ("hooks", "ready, edit-link".to_owned()),
            ]
        );
    }

    #[test]
    fn test_summary_fields_defaults() {
        let fields = summary_fields(&SiteConfig::default());
        assert_eq!(fields[2], ("repo", "-".to_owned()));
        assert_eq!(fields[4], ("edit link", "disabled".to_owned()));
    }
}
