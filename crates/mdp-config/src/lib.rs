//! Configuration management for mdp.
//!
//! Parses `mdp.toml` with serde and discovers it in the current directory or
//! any parent. CLI settings passed to [`Config::load`] override file values.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [document]
//! path = "README.md"
//! ```
//!
//! `server.host` and `document.path` support `${VAR}` and
//! `${VAR:-default}` environment variable references.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override the markdown document to serve.
    pub document: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdp.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Document section as written in TOML.
    document: DocumentConfigRaw,

    /// Resolved document path (set after loading).
    #[serde(skip)]
    pub document_path: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocumentConfigRaw {
    path: Option<String>,
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`MDP_HOST`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// An explicit `config_path` must exist. Without one, `mdp.toml` is
    /// searched for in the current directory and its parents, and defaults
    /// are used if none is found.
    ///
    /// # Errors
    ///
    /// Returns error if the explicit file is missing, parsing or env
    /// expansion fails, or the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Document path to serve.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if neither the config file nor the
    /// CLI named a document.
    pub fn require_document(&self) -> Result<&Path, ConfigError> {
        self.document_path.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "no document to serve: pass a path or set document.path".to_owned(),
            )
        })
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation(
                "server.host cannot be empty".to_owned(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(document) = &settings.document {
            self.document_path = Some(document.clone());
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.resolve_paths(path.parent().unwrap_or(Path::new(".")));
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_field(&self.server.host, "server.host")?;
        if let Some(path) = &self.document.path {
            self.document.path = Some(expand::expand_field(path, "document.path")?);
        }
        Ok(())
    }

    /// Resolve the document path against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.document_path = self.document.path.as_deref().map(|p| config_dir.join(p));
    }
}

/// Search `start` and its parents for `mdp.toml`.
fn discover_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.document_path.is_none());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.document.path.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000

[document]
path = "notes/today.md"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.document.path.as_deref(), Some("notes/today.md"));
    }

    #[test]
    fn test_resolve_document_relative_to_config_dir() {
        let mut config: Config = toml::from_str("[document]\npath = \"a/b.md\"").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(config.document_path, Some(PathBuf::from("/project/a/b.md")));
    }

    #[test]
    fn test_load_from_file_sets_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[document]\npath = \"doc.md\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.require_document().unwrap(), dir.path().join("doc.md"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/mdp.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_port_zero_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            discover_config(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_apply_cli_settings_override() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(3000),
            document: Some(PathBuf::from("/tmp/x.md")),
        });

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.document_path, Some(PathBuf::from("/tmp/x.md")));
    }

    #[test]
    fn test_apply_cli_settings_empty_keeps_values() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.document_path.is_none());
    }

    #[test]
    fn test_cli_document_overrides_file_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[document]\npath = \"from-file.md\"\n").unwrap();

        let settings = CliSettings {
            document: Some(PathBuf::from("from-cli.md")),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.require_document().unwrap(), Path::new("from-cli.md"));
    }

    #[test]
    fn test_require_document_missing() {
        let err = Config::default().require_document().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("document.path"));
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.server.host = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_expand_env_vars_in_document_path() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MDP_TEST_DOC_NAME", "guide");
        }
        let mut config: Config =
            toml::from_str("[document]\npath = \"${MDP_TEST_DOC_NAME}.md\"").unwrap();
        config.expand_env_vars().unwrap();
        assert_eq!(config.document.path.as_deref(), Some("guide.md"));
        unsafe {
            std::env::remove_var("MDP_TEST_DOC_NAME");
        }
    }
}
