//! Ordered execution of lifecycle hooks.

use docsite_config::{HookKind, SiteConfig};

use crate::diagnostics::PathDiagnosticsHook;
use crate::edit_link::EditLinkHook;
use crate::hook::{Hook, HookOutcome, NavigationContext, Route};
use crate::ready::ReadyHook;

/// Runs registered hooks in order against one configuration.
///
/// `before_each` threads the page content through every hook: a hook that
/// returns [`HookOutcome::Replace`] hands its output to the next one, a hook
/// that returns [`HookOutcome::Continue`] passes the content on unchanged.
pub struct HookRunner<'a> {
    config: &'a SiteConfig,
    hooks: Vec<Box<dyn Hook>>,
}

impl<'a> HookRunner<'a> {
    /// Create a runner with no hooks.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            hooks: Vec::new(),
        }
    }

    /// Create a runner with the hooks listed in `hooks.enabled`, in order.
    ///
    /// The edit-link hook is skipped with a warning when neither `site.repo`
    /// nor `edit_link.base_url` is set.
    pub fn from_config(config: &'a SiteConfig) -> Self {
        let mut runner = Self::new(config);
        for kind in &config.hooks.enabled {
            match kind {
                HookKind::EditLink => match EditLinkHook::from_config(config) {
                    Some(hook) => runner.hooks.push(Box::new(hook)),
                    None => tracing::warn!(
                        "edit-link hook enabled but neither site.repo nor edit_link.base_url is set"
                    ),
                },
                HookKind::PathDiagnostics => runner.hooks.push(Box::new(PathDiagnosticsHook)),
                HookKind::Ready => runner.hooks.push(Box::new(ReadyHook)),
            }
        }
        runner
    }

    /// Append a hook after the existing ones.
    #[must_use]
    pub fn with_hook<H: Hook + 'static>(mut self, hook: H) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Names of registered hooks, in run order.
    pub fn hook_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.hooks.iter().map(|h| h.name())
    }

    /// Run every `before_each` hook and return the final content.
    pub fn before_each(&self, route: &Route, html: String) -> String {
        let ctx = self.context(route);
        self.hooks
            .iter()
            .fold(html, |html, hook| match hook.before_each(&ctx, &html) {
                HookOutcome::Replace(next) => {
                    tracing::debug!(hook = hook.name(), "Content replaced");
                    next
                }
                HookOutcome::Continue => html,
            })
    }

    /// Run every `done_each` hook.
    pub fn done_each(&self, route: &Route) {
        let ctx = self.context(route);
        for hook in &self.hooks {
            hook.done_each(&ctx);
        }
    }

    /// Run every `ready` hook.
    pub fn ready(&self) {
        for hook in &self.hooks {
            hook.ready(self.config);
        }
    }

    fn context<'r>(&self, route: &'r Route) -> NavigationContext<'r>
    where
        'a: 'r,
    {
        NavigationContext {
            route,
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    assert_impl_all!(HookRunner<'static>: Send, Sync);

    /// Appends a marker so ordering is visible in the output.
    struct Suffix(&'static str);

    impl Hook for Suffix {
        fn name(&self) -> &'static str {
            "suffix"
        }

        fn before_each(&self, _ctx: &NavigationContext<'_>, html: &str) -> HookOutcome {
            HookOutcome::Replace(format!("{html}{}", self.0))
        }
    }

    /// Records which lifecycle points ran.
    #[derive(Default)]
    struct Recorder {
        done: AtomicUsize,
        ready: AtomicUsize,
        paths: Mutex<Vec<String>>,
    }

    impl Hook for &'static Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn done_each(&self, ctx: &NavigationContext<'_>) {
            self.done.fetch_add(1, Ordering::SeqCst);
            self.paths.lock().unwrap().push(ctx.route.path.clone());
        }

        fn ready(&self, _config: &SiteConfig) {
            self.ready.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn repo_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.repo = Some("https://github.com/lzhch/tech-notes".to_owned());
        config
    }

    #[test]
    fn test_from_config_order() {
        let config = repo_config();
        let runner = HookRunner::from_config(&config);
        assert_eq!(
            runner.hook_names().collect::<Vec<_>>(),
            vec!["edit-link", "path-diagnostics", "ready"]
        );
    }

    #[test]
    fn test_from_config_skips_edit_link_without_repo() {
        let config = SiteConfig::default();
        let runner = HookRunner::from_config(&config);
        assert_eq!(
            runner.hook_names().collect::<Vec<_>>(),
            vec!["path-diagnostics", "ready"]
        );
    }

    #[test]
    fn test_from_config_respects_enabled_list() {
        let mut config = repo_config();
        config.hooks.enabled = vec![HookKind::Ready, HookKind::EditLink];
        let runner = HookRunner::from_config(&config);
        assert_eq!(
            runner.hook_names().collect::<Vec<_>>(),
            vec!["ready", "edit-link"]
        );
    }

    #[test]
    fn test_before_each_threads_content() {
        let config = SiteConfig::default();
        let runner = HookRunner::new(&config)
            .with_hook(Suffix("-a"))
            .with_hook(PathDiagnosticsHook)
            .with_hook(Suffix("-b"));

        let html = runner.before_each(&Route::new("/", "README.md"), "page".to_owned());
        assert_eq!(html, "page-a-b");
    }

    #[test]
    fn test_before_each_with_edit_link() {
        let config = repo_config();
        let runner = HookRunner::from_config(&config);

        let html = runner.before_each(
            &Route::new("/07_AI/", "07_AI/RAG (DeepSeek).md"),
            "# RAG".to_owned(),
        );
        assert_eq!(
            html,
            "[:memo: Edit this page](https://github.com/lzhch/tech-notes/blob/main/07_AI/RAG%20%28DeepSeek%29.md)\n\n# RAG"
        );
    }

    #[test]
    fn test_no_hooks_returns_input() {
        let config = SiteConfig::default();
        let runner = HookRunner::new(&config);
        assert_eq!(runner.before_each(&Route::default(), "x".to_owned()), "x");
    }

    #[test]
    fn test_done_each_and_ready_reach_every_hook() {
        static RECORDER: std::sync::LazyLock<Recorder> =
            std::sync::LazyLock::new(Recorder::default);

        let config = SiteConfig::default();
        let runner = HookRunner::from_config(&config).with_hook(&*RECORDER);

        runner.done_each(&Route::new("/guide", "guide.md"));
        runner.done_each(&Route::new("/404", "missing.md"));
        runner.ready();

        assert_eq!(RECORDER.done.load(Ordering::SeqCst), 2);
        assert_eq!(RECORDER.ready.load(Ordering::SeqCst), 1);
        assert_eq!(*RECORDER.paths.lock().unwrap(), vec!["/guide", "/404"]);
    }
}
