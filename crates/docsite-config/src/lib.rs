//! Site configuration for docsite.
//!
//! Parses `docsite.toml` with serde and provides auto-discovery of the
//! config file in parent directories. The loaded [`SiteConfig`] is an
//! immutable value: build it once, then pass it by reference to the hook
//! runner and to [`SiteConfig::renderer_options`].
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.repo`
//! - `edit_link.base_url`

mod expand;
mod options;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use docsite_paths::{AliasError, AliasRule, AliasTable};
use serde::{Deserialize, Serialize};

pub use options::RendererOptions;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

/// Deepest heading level the renderer understands.
const MAX_HEADING_LEVEL: u8 = 6;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override routing mode.
    pub routing_mode: Option<RoutingMode>,
    /// Override routing base path.
    pub base_path: Option<String>,
    /// Override repository URL.
    pub repo: Option<String>,
}

/// Site configuration consumed by the renderer and the lifecycle hooks.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site metadata.
    pub site: SiteMetadata,
    /// Sidebar, navbar and cover page toggles.
    pub layout: LayoutConfig,
    /// Router configuration.
    pub routing: RoutingConfig,
    /// Alias rules in declaration order.
    ///
    /// Compiled into the table returned by [`alias_table`](Self::alias_table)
    /// when loading; use [`set_aliases`](Self::set_aliases) to replace them.
    #[serde(rename = "alias")]
    pub(crate) aliases: Vec<AliasRule>,
    /// Full-text search options.
    pub search: SearchConfig,
    /// Copy-code button captions.
    pub copy_code: CopyCodeConfig,
    /// Pagination captions.
    pub pagination: PaginationConfig,
    /// Word count display.
    pub count: CountConfig,
    /// Syntax highlighting.
    pub highlight: HighlightConfig,
    /// Attributes for links leaving the site.
    pub external_links: ExternalLinksConfig,
    /// "Edit this page" banner.
    pub edit_link: EditLinkConfig,
    /// Lifecycle hook registrations.
    pub hooks: HooksConfig,

    /// Compiled alias rules (set after loading).
    #[serde(skip)]
    alias_table: AliasTable,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Site name shown in the sidebar.
    pub name: String,
    /// Source repository URL.
    pub repo: Option<String>,
    /// Markdown file served at the root route.
    pub homepage: String,
    /// Target of the site name link.
    pub name_link: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            name: "Documentation".to_owned(),
            repo: None,
            homepage: "README.md".to_owned(),
            name_link: "/".to_owned(),
        }
    }
}

/// Page layout toggles.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub load_sidebar: bool,
    pub load_navbar: bool,
    pub coverpage: bool,
    pub only_cover: bool,
    /// Scroll to the top after each navigation.
    pub auto_to_top: bool,
    /// Deepest heading level in the sidebar table of contents.
    pub max_level: u8,
    /// Deepest heading level listed under each sidebar entry.
    pub sub_max_level: u8,
    pub sidebar_display_level: u8,
    pub hide_sidebar: bool,
    /// Serve `_404.md` for unresolved routes.
    pub not_found_page: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            load_sidebar: true,
            load_navbar: true,
            coverpage: true,
            only_cover: false,
            auto_to_top: true,
            max_level: 4,
            sub_max_level: 3,
            sidebar_display_level: 1,
            hide_sidebar: false,
            not_found_page: true,
        }
    }
}

/// How the current document path is kept in the URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// Path lives in the URL fragment (`#/guide`).
    #[default]
    Hash,
    /// Path lives in the URL path (`/guide`).
    History,
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash => f.write_str("hash"),
            Self::History => f.write_str("history"),
        }
    }
}

impl FromStr for RoutingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hash" => Ok(Self::Hash),
            "history" => Ok(Self::History),
            other => Err(ConfigError::Validation(format!(
                "unknown routing mode `{other}` (expected `hash` or `history`)"
            ))),
        }
    }
}

/// Router configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub mode: RoutingMode,
    /// Prefix prepended to every content fetch.
    pub base_path: String,
    /// Resolve links relative to the current page.
    pub relative_path: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            mode: RoutingMode::Hash,
            base_path: "/".to_owned(),
            relative_path: false,
        }
    }
}

/// Which documents the search index covers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SearchPaths {
    /// Keyword; only `auto` (index every page reachable from the sidebar).
    Keyword(String),
    /// Explicit list of paths.
    List(Vec<String>),
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self::Keyword("auto".to_owned())
    }
}

/// Full-text search options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Index cache lifetime in milliseconds.
    pub max_age_ms: u64,
    pub paths: SearchPaths,
    pub placeholder: String,
    /// Text shown when nothing matches.
    pub no_data: String,
    /// Deepest heading level indexed.
    pub depth: u8,
    pub hide_other_sidebar_content: bool,
    pub path_namespaces: Vec<String>,
    /// Index storage key namespace.
    pub namespace: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_age_ms: 86_400_000,
            paths: SearchPaths::default(),
            placeholder: "Search".to_owned(),
            no_data: "No results".to_owned(),
            depth: 6,
            hide_other_sidebar_content: false,
            path_namespaces: vec!["/".to_owned()],
            namespace: None,
        }
    }
}

/// Copy-code button captions.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CopyCodeConfig {
    pub button_text: String,
    pub error_text: String,
    pub success_text: String,
}

impl Default for CopyCodeConfig {
    fn default() -> Self {
        Self {
            button_text: "Copy to clipboard".to_owned(),
            error_text: "Error".to_owned(),
            success_text: "Copied".to_owned(),
        }
    }
}

/// Pagination captions.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub previous_text: String,
    pub next_text: String,
    /// Continue pagination across sidebar chapters.
    pub cross_chapter: bool,
    /// Show the chapter name next to the caption.
    pub cross_chapter_text: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            previous_text: "Previous".to_owned(),
            next_text: "Next".to_owned(),
            cross_chapter: true,
            cross_chapter_text: true,
        }
    }
}

/// Word count display.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CountConfig {
    pub countable: bool,
    pub font_size: String,
    pub color: String,
    /// Counting rules (`english` or `chinese`).
    pub language: String,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            countable: true,
            font_size: "0.9em".to_owned(),
            color: "rgb(90,90,90)".to_owned(),
            language: "english".to_owned(),
        }
    }
}

/// Syntax highlighting.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_owned(),
        }
    }
}

/// Attributes for links leaving the site.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExternalLinksConfig {
    pub target: String,
    pub rel: String,
}

impl Default for ExternalLinksConfig {
    fn default() -> Self {
        Self {
            target: "_blank".to_owned(),
            rel: "noopener".to_owned(),
        }
    }
}

/// "Edit this page" banner.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EditLinkConfig {
    /// Branch used when the base URL is derived from `site.repo`.
    pub branch: String,
    /// Link text (markdown, emoji shortcodes allowed).
    pub label: String,
    /// Explicit base URL; the route's file is appended to it.
    pub base_url: Option<String>,
}

impl Default for EditLinkConfig {
    fn default() -> Self {
        Self {
            branch: "main".to_owned(),
            label: ":memo: Edit this page".to_owned(),
            base_url: None,
        }
    }
}

/// Built-in lifecycle hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookKind {
    /// Prepend an "edit this page" link to every page.
    EditLink,
    /// Log path-encoding diagnostics and not-found remediation.
    PathDiagnostics,
    /// Log a startup confirmation.
    Ready,
}

impl HookKind {
    /// Name as written in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EditLink => "edit-link",
            Self::PathDiagnostics => "path-diagnostics",
            Self::Ready => "ready",
        }
    }
}

/// Lifecycle hook registrations.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    /// Hooks to run, in order.
    pub enabled: Vec<HookKind>,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            enabled: vec![HookKind::EditLink, HookKind::PathDiagnostics, HookKind::Ready],
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Invalid alias rule.
    #[error("Configuration error: {0}")]
    Alias(#[from] AliasError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.repo`").
        field: String,
        /// Error message (e.g., "${`REPO_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a heading level in `1..=6`.
fn require_heading_level(level: u8, field: &str) -> Result<(), ConfigError> {
    if !(1..=MAX_HEADING_LEVEL).contains(&level) {
        return Err(ConfigError::Validation(format!(
            "{field} must be between 1 and {MAX_HEADING_LEVEL}"
        )));
    }
    Ok(())
}

/// Require alias patterns to be distinct.
///
/// The renderer receives aliases as an object keyed by pattern, so a repeated
/// pattern would keep only its last replacement there.
fn validate_unique_patterns(rules: &[AliasRule]) -> Result<(), ConfigError> {
    for (i, rule) in rules.iter().enumerate() {
        if rules[..i].iter().any(|earlier| earlier.pattern == rule.pattern) {
            return Err(ConfigError::Validation(format!(
                "alias pattern `{}` is declared more than once",
                rule.pattern
            )));
        }
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `docsite.toml` in the current directory and parents,
    /// falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML text, then expand, compile and validate it.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion, alias compilation or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.compile_aliases()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(mode) = settings.routing_mode {
            self.routing.mode = mode;
        }
        if let Some(base_path) = &settings.base_path {
            self.routing.base_path.clone_from(base_path);
        }
        if let Some(repo) = &settings.repo {
            self.site.repo = Some(repo.clone());
        }
    }

    /// Base URL for "edit this page" links, always ending with `/`.
    ///
    /// Uses `edit_link.base_url` when set, otherwise
    /// `{site.repo}/blob/{edit_link.branch}/`. Returns `None` when neither
    /// is configured.
    pub fn edit_base_url(&self) -> Option<String> {
        let base = match (&self.edit_link.base_url, &self.site.repo) {
            (Some(base), _) => base.clone(),
            (None, Some(repo)) => format!(
                "{}/blob/{}/",
                repo.trim_end_matches('/'),
                self.edit_link.branch
            ),
            (None, None) => return None,
        };

        if base.ends_with('/') {
            Some(base)
        } else {
            Some(format!("{base}/"))
        }
    }

    /// Option object handed to the external renderer at initialization.
    pub fn renderer_options(&self) -> RendererOptions<'_> {
        RendererOptions::new(self)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Compile `aliases` into `alias_table`, keeping declaration order.
    fn compile_aliases(&mut self) -> Result<(), ConfigError> {
        self.alias_table = AliasTable::new(self.aliases.clone())?;
        Ok(())
    }

    /// Declared alias rules in order.
    pub fn aliases(&self) -> &[AliasRule] {
        &self.aliases
    }

    /// Compiled alias rules, in the same order as [`aliases`](Self::aliases).
    pub fn alias_table(&self) -> &AliasTable {
        &self.alias_table
    }

    /// Replace the alias rules and recompile the table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Alias` if a rule fails to compile, or
    /// `ConfigError::Validation` if two rules share a pattern. The previous
    /// rules are kept on error.
    pub fn set_aliases(&mut self, rules: Vec<AliasRule>) -> Result<(), ConfigError> {
        validate_unique_patterns(&rules)?;
        self.alias_table = AliasTable::new(rules.clone())?;
        self.aliases = rules;
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_layout()?;
        self.validate_search()?;
        validate_unique_patterns(&self.aliases)?;
        self.validate_hooks()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;
        require_non_empty(&self.site.homepage, "site.homepage")?;
        if let Some(ref repo) = self.site.repo {
            require_http_url(repo, "site.repo")?;
        }
        if let Some(ref base_url) = self.edit_link.base_url {
            require_http_url(base_url, "edit_link.base_url")?;
        }
        Ok(())
    }

    fn validate_layout(&self) -> Result<(), ConfigError> {
        require_heading_level(self.layout.max_level, "layout.max_level")?;
        require_heading_level(self.layout.sub_max_level, "layout.sub_max_level")?;
        Ok(())
    }

    fn validate_search(&self) -> Result<(), ConfigError> {
        if self.search.max_age_ms == 0 {
            return Err(ConfigError::Validation(
                "search.max_age_ms must be greater than 0".to_owned(),
            ));
        }
        require_heading_level(self.search.depth, "search.depth")?;
        if let SearchPaths::Keyword(ref keyword) = self.search.paths
            && keyword != "auto"
        {
            return Err(ConfigError::Validation(format!(
                "search.paths must be \"auto\" or a list of paths, got \"{keyword}\""
            )));
        }
        Ok(())
    }

    fn validate_hooks(&self) -> Result<(), ConfigError> {
        for (i, hook) in self.hooks.enabled.iter().enumerate() {
            if self.hooks.enabled[..i].contains(hook) {
                return Err(ConfigError::Validation(format!(
                    "hooks.enabled lists `{}` more than once",
                    hook.as_str()
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.site.repo {
            self.site.repo = Some(expand::expand_env(repo, "site.repo")?);
        }
        if let Some(ref base_url) = self.edit_link.base_url {
            self.edit_link.base_url = Some(expand::expand_env(base_url, "edit_link.base_url")?);
        }
        Ok(())
    }
}
