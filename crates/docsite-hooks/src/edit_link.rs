//! "Edit this page" banner.

use docsite_config::SiteConfig;
use docsite_paths::normalize_path;

use crate::hook::{Hook, HookOutcome, NavigationContext};

/// Prepends a markdown link to the page's source in the repository.
#[derive(Clone, Debug)]
pub struct EditLinkHook {
    base_url: String,
    label: String,
}

impl EditLinkHook {
    /// Create a hook linking to `base_url` + file. `base_url` should end with `/`.
    pub fn new(base_url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            label: label.into(),
        }
    }

    /// Build from configuration. Returns `None` when no edit base URL is known.
    pub fn from_config(config: &SiteConfig) -> Option<Self> {
        config
            .edit_base_url()
            .map(|base| Self::new(base, config.edit_link.label.clone()))
    }

    /// URL of the source for `file`.
    ///
    /// The file is normalized so that spaces, parentheses and ampersands do
    /// not terminate the markdown link target early.
    pub fn edit_url(&self, file: &str) -> String {
        format!(
            "{}{}",
            self.base_url,
            normalize_path(file.trim_start_matches('/'))
        )
    }
}

impl Hook for EditLinkHook {
    fn name(&self) -> &'static str {
        "edit-link"
    }

    fn before_each(&self, ctx: &NavigationContext<'_>, html: &str) -> HookOutcome {
        if ctx.route.file.is_empty() {
            return HookOutcome::Continue;
        }

        let url = self.edit_url(&ctx.route.file);
        HookOutcome::Replace(format!("[{}]({url})\n\n{html}", self.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Route;
    use pretty_assertions::assert_eq;

    fn hook() -> EditLinkHook {
        EditLinkHook::new(
            "https://github.com/lzhch/tech-notes/blob/main/",
            ":memo: 编辑此页",
        )
    }

    fn run(hook: &EditLinkHook, route: &Route, html: &str) -> HookOutcome {
        let config = SiteConfig::default();
        let ctx = NavigationContext {
            route,
            config: &config,
        };
        hook.before_each(&ctx, html)
    }

    #[test]
    fn test_prepends_link() {
        let route = Route::new("/01_Java/", "01_Java/README.md");
        assert_eq!(
            run(&hook(), &route, "# Java"),
            HookOutcome::Replace(
                "[:memo: 编辑此页](https://github.com/lzhch/tech-notes/blob/main/01_Java/README.md)\n\n# Java"
                    .to_owned()
            )
        );
    }

    #[test]
    fn test_encodes_reserved_characters_in_file() {
        assert_eq!(
            hook().edit_url("01_Java/04_JVM&JDK/GC (G1).md"),
            "https://github.com/lzhch/tech-notes/blob/main/01_Java/04_JVM%26JDK/GC%20%28G1%29.md"
        );
    }

    #[test]
    fn test_strips_leading_slash() {
        assert_eq!(
            hook().edit_url("/README.md"),
            "https://github.com/lzhch/tech-notes/blob/main/README.md"
        );
    }

    #[test]
    fn test_skips_route_without_file() {
        let route = Route::new("/", "");
        assert_eq!(run(&hook(), &route, "# Home"), HookOutcome::Continue);
    }

    #[test]
    fn test_from_config_requires_repo() {
        let mut config = SiteConfig::default();
        assert!(EditLinkHook::from_config(&config).is_none());

        config.site.repo = Some("https://github.com/lzhch/tech-notes".to_owned());
        config.edit_link.branch = "gh-pages".to_owned();
        let hook = EditLinkHook::from_config(&config).unwrap();
        assert_eq!(
            hook.edit_url("README.md"),
            "https://github.com/lzhch/tech-notes/blob/gh-pages/README.md"
        );
    }
}
