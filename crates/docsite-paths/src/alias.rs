//! Alias rules rewriting logical route paths to on-disk lookup paths.
//!
//! Rules are tried in declaration order and the first one whose pattern
//! matches the whole path wins. The replacement template refers to the
//! pattern's single capturing group as `$1`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `$1`-style placeholder or `$$` escape in a replacement template.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$(\$|\d+)").unwrap());

/// Uncompiled alias rule as declared in configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AliasRule {
    /// Regular expression matched against the entire logical path.
    pub pattern: String,
    /// Replacement template; `$1` expands to the captured group.
    pub replacement: String,
}

impl AliasRule {
    /// Create a rule from a pattern and a replacement template.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Error returned when an alias rule cannot be compiled.
#[derive(Debug, thiserror::Error)]
pub enum AliasError {
    /// Pattern is not a valid regular expression.
    #[error("alias pattern `{pattern}` is invalid: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// Pattern does not have exactly one capturing group.
    #[error("alias pattern `{pattern}` must have exactly one capturing group, found {found}")]
    CaptureCount { pattern: String, found: usize },
    /// Replacement does not reference the capture, or references a missing one.
    #[error("alias replacement `{replacement}` must use `$1` and no other placeholder")]
    Placeholder { replacement: String },
}

/// Translate a replacement into a [`Captures::expand`] template.
///
/// `$1` becomes `${1}` so trailing text cannot extend the group name, `$$`
/// is a literal dollar, and any other `$` is kept verbatim. Returns `None`
/// when the replacement has no `$1` or names another group.
///
/// [`Captures::expand`]: regex::Captures::expand
fn build_template(replacement: &str) -> Option<String> {
    let mut template = String::with_capacity(replacement.len() + 4);
    let mut has_capture = false;
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(replacement) {
        let token = caps.get_match();
        template.push_str(&replacement[last..token.start()].replace('$', "$$"));
        match &caps[1] {
            "$" => template.push_str("$$"),
            "1" => {
                template.push_str("${1}");
                has_capture = true;
            }
            _ => return None,
        }
        last = token.end();
    }
    template.push_str(&replacement[last..].replace('$', "$$"));

    has_capture.then_some(template)
}

/// Compiled rule: anchored regex plus a template with `${1}` placeholders.
#[derive(Debug)]
struct CompiledRule {
    regex: Regex,
    template: String,
}

impl CompiledRule {
    fn compile(rule: &AliasRule) -> Result<Self, AliasError> {
        let regex = Regex::new(&format!("^(?:{})$", rule.pattern)).map_err(|source| {
            AliasError::InvalidPattern {
                pattern: rule.pattern.clone(),
                source,
            }
        })?;

        // captures_len() counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(AliasError::CaptureCount {
                pattern: rule.pattern.clone(),
                found,
            });
        }

        let template = build_template(&rule.replacement).ok_or_else(|| AliasError::Placeholder {
            replacement: rule.replacement.clone(),
        })?;

        Ok(Self { regex, template })
    }

    fn apply(&self, path: &str) -> Option<String> {
        let caps = self.regex.captures(path)?;
        let mut out = String::with_capacity(self.template.len() + path.len());
        caps.expand(&self.template, &mut out);
        Some(out)
    }
}

/// Ordered, compiled set of alias rules.
///
/// # Example
///
/// ```
/// use docsite_paths::{AliasRule, AliasTable};
///
/// let table = AliasTable::new(vec![
///     AliasRule::new("/01_Java/04_JVMJDK/(.*)", "/01_Java/04_JVM&JDK/$1"),
/// ])
/// .unwrap();
///
/// assert_eq!(table.resolve("/01_Java/04_JVMJDK/gc.md"), "/01_Java/04_JVM&JDK/gc.md");
/// assert_eq!(table.resolve("/README.md"), "/README.md");
/// ```
#[derive(Debug, Default)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
    compiled: Vec<CompiledRule>,
}

impl AliasTable {
    /// Compile `rules`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the error for the first rule that fails validation.
    pub fn new(rules: Vec<AliasRule>) -> Result<Self, AliasError> {
        let compiled = rules
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules, compiled })
    }

    /// Rewrite `path` with the first matching rule.
    ///
    /// Returns the input unchanged (borrowed) when no rule matches.
    pub fn resolve<'a>(&self, path: &'a str) -> Cow<'a, str> {
        match self.resolve_with_rule(path) {
            Some((_, rewritten)) => Cow::Owned(rewritten),
            None => Cow::Borrowed(path),
        }
    }

    /// Like [`resolve`](Self::resolve), also reporting which rule matched.
    ///
    /// Returns `None` when no rule matches.
    pub fn resolve_with_rule(&self, path: &str) -> Option<(usize, String)> {
        self.compiled
            .iter()
            .enumerate()
            .find_map(|(index, rule)| rule.apply(path).map(|out| (index, out)))
    }

    /// Declared rules in order.
    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
