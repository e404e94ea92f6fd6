//! Hook trait and navigation context.

use docsite_config::SiteConfig;

/// Route path the renderer reports for unresolved pages.
pub(crate) const NOT_FOUND_PATH: &str = "/404";

/// The navigation currently being rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    /// Logical path as it appears in the URL (may be percent-encoded).
    pub path: String,
    /// Source file the path resolved to, relative to the site root.
    pub file: String,
    /// Raw query string without the leading `?`.
    pub query: String,
}

impl Route {
    /// Create a route without a query string.
    pub fn new(path: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file: file.into(),
            query: String::new(),
        }
    }

    /// Whether the renderer fell back to its not-found page.
    pub fn is_not_found(&self) -> bool {
        self.path == NOT_FOUND_PATH
    }
}

/// Everything a hook may look at during one navigation.
#[derive(Clone, Copy, Debug)]
pub struct NavigationContext<'a> {
    pub route: &'a Route,
    pub config: &'a SiteConfig,
}

/// Result of a `before_each` hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HookOutcome {
    /// Use this content instead of the input.
    Replace(String),
    /// Leave the content unchanged and continue with the next hook.
    Continue,
}

/// A renderer lifecycle hook.
///
/// All methods default to doing nothing, so a hook implements only the
/// lifecycle points it cares about.
pub trait Hook: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Called with the page markdown before it is rendered.
    fn before_each(&self, _ctx: &NavigationContext<'_>, _html: &str) -> HookOutcome {
        HookOutcome::Continue
    }

    /// Called after the page has been rendered.
    fn done_each(&self, _ctx: &NavigationContext<'_>) {}

    /// Called once after the renderer has initialized.
    fn ready(&self, _config: &SiteConfig) {}
}
