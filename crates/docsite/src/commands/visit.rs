//! `docsite visit` command implementation.

use clap::Args;
use docsite_config::SiteConfig;
use docsite_hooks::{HookRunner, Route};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the visit command.
#[derive(Args)]
pub(crate) struct VisitArgs {
    /// Logical route path (e.g. "/01_Java/" or "/404").
    path: String,

    /// Source file for the route (default: derived from the aliased path).
    #[arg(long)]
    file: Option<String>,

    /// Page markdown passed to `before_each`.
    #[arg(long, default_value = "")]
    html: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl VisitArgs {
    /// Execute the visit command.
    ///
    /// Runs `ready`, then `before_each` and `done_each` for the route, and
    /// prints the content the renderer would receive.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        let (path, query) = split_query(&self.path);
        let file = self.file.unwrap_or_else(|| route_file(&config, path));
        let route = Route {
            path: path.to_owned(),
            file,
            query: query.to_owned(),
        };

        tracing::debug!(path = %route.path, file = %route.file, "Visiting route");

        let runner = HookRunner::from_config(&config);
        output.field("hooks", &runner.hook_names().collect::<Vec<_>>().join(", "));
        output.field("file", &route.file);

        runner.ready();
        let html = runner.before_each(&route, self.html);
        runner.done_each(&route);

        output.data(&html);
        Ok(())
    }
}

/// Split `path?query` into its parts.
fn split_query(path: &str) -> (&str, &str) {
    path.split_once('?').unwrap_or((path, ""))
}

/// Markdown file the renderer would fetch for `path`.
///
/// Applies alias rules, then maps directories to their `README.md` (or the
/// configured homepage at the root) and appends `.md` to bare names.
fn route_file(config: &SiteConfig, path: &str) -> String {
    let resolved = config.alias_table().resolve(path);
    let relative = resolved.trim_start_matches('/');

    if relative.is_empty() {
        config.site.homepage.clone()
    } else if relative.ends_with('/') {
        format!("{relative}README.md")
    } else if relative.ends_with(".md") {
        relative.to_owned()
    } else {
        format!("{relative}.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct VisitCli {
        #[command(flatten)]
        args: VisitArgs,
    }

    #[test]
    fn test_parse_html_flag() {
        let cli = VisitCli::try_parse_from(["visit", "/404", "--html", "# Missing"]).unwrap();
        assert_eq!(cli.args.path, "/404");
        assert_eq!(cli.args.html, "# Missing");
        assert_eq!(cli.args.file, None);
    }

    #[test]
    fn test_parse_html_defaults_to_empty() {
        let cli = VisitCli::try_parse_from(["visit", "/guide", "--file", "guide.md"]).unwrap();
        assert_eq!(cli.args.html, "");
        assert_eq!(cli.args.file.as_deref(), Some("guide.md"));
    }

    #[test]
    fn test_split_query() {
        assert_eq!(split_query("/guide?id=intro"), ("/guide", "id=intro"));
        assert_eq!(split_query("/guide"), ("/guide", ""));
    }

    #[test]
    fn test_route_file_root_is_homepage() {
        let config = SiteConfig::default();
        assert_eq!(route_file(&config, "/"), "README.md");
        assert_eq!(route_file(&config, ""), "README.md");
    }

    #[test]
    fn test_route_file_directory_and_page() {
        let config = SiteConfig::default();
        assert_eq!(route_file(&config, "/01_Java/"), "01_Java/README.md");
        assert_eq!(route_file(&config, "/01_Java/集合"), "01_Java/集合.md");
        assert_eq!(route_file(&config, "/01_Java/集合.md"), "01_Java/集合.md");
    }

    #[test]
    fn test_route_file_applies_alias() {
        let config = SiteConfig::from_toml(
            r#"
[[alias]]
pattern = "/02_数据库/02_ElasticSearch/(.*)"
replacement = "/02_数据库/02_Elastic%20Search/$1"
"#,
        )
        .unwrap();
        assert_eq!(
            route_file(&config, "/02_数据库/02_ElasticSearch/mapping"),
            "02_数据库/02_Elastic%20Search/mapping.md"
        );
    }
}
