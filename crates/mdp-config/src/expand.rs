//! `${VAR}` and `${VAR:-default}` expansion in configuration strings.

use crate::ConfigError;

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);

/// Expand environment variable references in a config value.
///
/// Values containing no `${` are returned unchanged, bare `$VAR` included.
/// `field` names the config key in the error message.
pub(crate) fn expand_field(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| -> Result<Option<String>, UnsetVar> {
        std::env::var(name)
            .map(Some)
            .map_err(|_| UnsetVar(name.to_owned()))
    };

    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_value_without_reference_unchanged() {
        assert_eq!(expand_field("README.md", "document.path").unwrap(), "README.md");
    }

    #[test]
    fn test_expand_set_var_inside_path() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MDP_TEST_DOCS_DIR", "/srv/docs");
        }
        let result = expand_field("${MDP_TEST_DOCS_DIR}/index.md", "document.path").unwrap();
        assert_eq!(result, "/srv/docs/index.md");
        unsafe {
            std::env::remove_var("MDP_TEST_DOCS_DIR");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MDP_TEST_UNSET_HOST");
        }
        let result = expand_field("${MDP_TEST_UNSET_HOST:-0.0.0.0}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
    }

    #[test]
    fn test_unset_var_reports_field_and_name() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MDP_TEST_MISSING");
        }
        let err = expand_field("${MDP_TEST_MISSING}", "server.host").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("MDP_TEST_MISSING"), "got: {msg}");
        assert!(msg.contains("server.host"), "got: {msg}");
    }

    #[test]
    fn test_bare_dollar_kept() {
        assert_eq!(expand_field("notes/$draft.md", "document.path").unwrap(), "notes/$draft.md");
    }
}
