//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error reporting. Strings without
/// `${` are returned as-is, so bare `$` characters in URLs survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_repo_owner() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_TEST_OWNER", "lzhch");
        }
        let result = expand_env("https://github.com/${DOCSITE_TEST_OWNER}/notes", "site.repo").unwrap();
        assert_eq!(result, "https://github.com/lzhch/notes");
        unsafe {
            std::env::remove_var("DOCSITE_TEST_OWNER");
        }
    }

    #[test]
    fn test_expand_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_TEST_UNSET_BRANCH");
        }
        let result = expand_env("blob/${DOCSITE_TEST_UNSET_BRANCH:-main}/", "edit_link.base_url").unwrap();
        assert_eq!(result, "blob/main/");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_TEST_MISSING");
        }
        let err = expand_env("${DOCSITE_TEST_MISSING}", "site.repo").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCSITE_TEST_MISSING"));
        assert!(err.to_string().contains("site.repo"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("https://example.com/$path", "site.repo").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }
}
