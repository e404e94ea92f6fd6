//! Path-encoding diagnostics and not-found remediation.

use docsite_paths::{AliasTable, needs_encoding, normalize_path, suggested_paths};
use percent_encoding::percent_decode_str;

use crate::hook::{Hook, HookOutcome, NavigationContext, Route};

/// Checks logged when a navigation ends on the not-found page.
pub const REMEDIATION_STEPS: [&str; 4] = [
    "check that spaces in the path are encoded as %20",
    "check that parentheses are encoded as %28 and %29",
    "check that & is encoded as %26",
    "check that the file exists in the repository",
];

/// What the diagnostics hook learned about a route path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDiagnosis {
    /// Route path with percent-escapes decoded.
    pub decoded: String,
    /// Whether the decoded path contains characters that need encoding.
    pub needs_encoding: bool,
    /// Encoded form of the decoded path.
    pub normalized: String,
    /// Index of the matching alias rule and its rewrite, if any.
    pub alias: Option<(usize, String)>,
}

impl RouteDiagnosis {
    /// Inspect `route`. Returns `None` for an empty path.
    pub fn of(route: &Route, aliases: &AliasTable) -> Option<Self> {
        if route.path.is_empty() {
            return None;
        }

        let decoded = percent_decode_str(&route.path)
            .decode_utf8_lossy()
            .into_owned();
        let alias = aliases.resolve_with_rule(&decoded);

        Some(Self {
            needs_encoding: needs_encoding(&decoded),
            normalized: normalize_path(&decoded),
            alias,
            decoded,
        })
    }
}

/// Logs the path of every navigation and explains not-found pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathDiagnosticsHook;

impl Hook for PathDiagnosticsHook {
    fn name(&self) -> &'static str {
        "path-diagnostics"
    }

    fn before_each(&self, ctx: &NavigationContext<'_>, _html: &str) -> HookOutcome {
        let Some(diagnosis) = RouteDiagnosis::of(ctx.route, ctx.config.alias_table()) else {
            return HookOutcome::Continue;
        };

        tracing::info!(path = %diagnosis.decoded, "Navigating");

        if diagnosis.needs_encoding {
            tracing::info!(
                path = %diagnosis.decoded,
                normalized = %diagnosis.normalized,
                "Path contains characters that need encoding"
            );
        }

        if let Some((rule, ref target)) = diagnosis.alias {
            tracing::debug!(path = %diagnosis.decoded, rule, target = %target, "Alias matched");
        }

        HookOutcome::Continue
    }

    fn done_each(&self, ctx: &NavigationContext<'_>) {
        if !ctx.route.is_not_found() {
            return;
        }

        tracing::warn!(file = %ctx.route.file, "Page not found");
        tracing::info!(steps = ?REMEDIATION_STEPS, "Path troubleshooting");

        let candidates = suggested_paths(Some(&ctx.route.file));
        if !candidates.is_empty() {
            tracing::info!(?candidates, "Candidate paths");
        }
    }
}
