//! Navigation lifecycle hooks for docsite.
//!
//! The external renderer calls into three lifecycle points:
//!
//! - `before_each(html)` before a page is rendered
//! - `done_each()` after a page is rendered
//! - `ready()` once, after initialization
//!
//! Each point is a method on the [`Hook`] trait. Hooks receive the current
//! navigation as an explicit [`NavigationContext`] instead of capturing
//! renderer state. Diagnostics are emitted through `tracing`; the subscriber
//! installed by the host decides where they go.
//!
//! # Example
//!
//! ```
//! use docsite_config::SiteConfig;
//! use docsite_hooks::{HookRunner, Route};
//!
//! let mut config = SiteConfig::default();
//! config.site.repo = Some("https://github.com/lzhch/tech-notes".to_owned());
//!
//! let runner = HookRunner::from_config(&config);
//! let route = Route::new("/01_Java/", "01_Java/README.md");
//! let html = runner.before_each(&route, "# Java".to_owned());
//!
//! assert!(html.starts_with("[:memo: Edit this page](https://github.com/lzhch/tech-notes/blob/main/01_Java/README.md)"));
//! ```

mod diagnostics;
mod edit_link;
mod hook;
mod ready;
mod runner;

pub use diagnostics::{PathDiagnosticsHook, REMEDIATION_STEPS, RouteDiagnosis};
pub use edit_link::EditLinkHook;
pub use hook::{Hook, HookOutcome, NavigationContext, Route};
pub use ready::{ReadyHook, ReadySummary};
pub use runner::HookRunner;
