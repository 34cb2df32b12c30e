//! Configuration management.

use crate::observability::{LogFormat, LoggingConfig};
use serde::Deserialize;
use std::path::PathBuf;

/// A repository governed by the ownership track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    /// Display name used in reports.
    pub name: String,
    /// Repository root; its `OWNERSHIP.yaml` lives directly under it.
    pub path: PathBuf,
}

impl RepoSpec {
    /// Creates a repo spec.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Parses a `NAME=PATH` pair from the command line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] when the pair is malformed.
    pub fn parse(s: &str) -> crate::Result<Self> {
        s.split_once('=')
            .filter(|(name, path)| !name.is_empty() && !path.is_empty())
            .map(|(name, path)| Self::new(name, path))
            .ok_or_else(|| crate::Error::InvalidInput(format!("expected NAME=PATH, got '{s}'")))
    }
}

/// Main configuration for confguard.
#[derive(Debug, Clone)]
pub struct ConfguardConfig {
    /// Root of the governed configuration repository.
    pub config_root: PathBuf,
    /// Repositories checked by the ownership track.
    pub repos: Vec<RepoSpec>,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for ConfguardConfig {
    fn default() -> Self {
        Self {
            config_root: PathBuf::from("."),
            repos: vec![RepoSpec::new("config", ".")],
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Root of the governed configuration repository.
    pub config_root: Option<String>,
    /// Repositories checked by the ownership track.
    #[serde(default)]
    pub repos: Vec<ConfigFileRepo>,
    /// Logging section.
    pub logging: Option<ConfigFileLogging>,
}

/// Repository entry in the config file.
#[derive(Debug, Deserialize)]
pub struct ConfigFileRepo {
    /// Display name.
    pub name: String,
    /// Repository root path.
    pub path: String,
}

/// Logging section in the config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileLogging {
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Filter directive.
    pub filter: Option<String>,
}

impl ConfguardConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &std::path::Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/confguard/` on macOS)
    /// 2. XDG config dir (`~/.config/confguard/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let platform_config = base_dirs
            .config_dir()
            .join("confguard")
            .join("config.toml");
        if platform_config.exists() {
            if let Ok(config) = Self::load_from_file(&platform_config) {
                return config;
            }
        }

        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("confguard")
            .join("config.toml");
        if xdg_config.exists() {
            if let Ok(config) = Self::load_from_file(&xdg_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `ConfguardConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(config_root) = file.config_root {
            config.config_root = PathBuf::from(config_root);
        }
        if file.repos.is_empty() {
            config.repos = vec![RepoSpec::new("config", config.config_root.clone())];
        } else {
            config.repos = file
                .repos
                .into_iter()
                .map(|repo| RepoSpec::new(repo.name, repo.path))
                .collect();
        }
        if let Some(logging) = file.logging {
            if let Some(format) = logging.format {
                config.logging.format = LogFormat::parse(&format);
            }
            config.logging.filter = logging.filter;
        }

        config
    }

    /// Sets the configuration root.
    #[must_use]
    pub fn with_config_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_root = path.into();
        self
    }

    /// Sets the governed repositories.
    #[must_use]
    pub fn with_repos(mut self, repos: Vec<RepoSpec>) -> Self {
        self.repos = repos;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_spec_parse() {
        let spec = RepoSpec::parse("docs=../pom-docs").unwrap();
        assert_eq!(spec.name, "docs");
        assert_eq!(spec.path, PathBuf::from("../pom-docs"));

        assert!(RepoSpec::parse("no-equals").is_err());
        assert!(RepoSpec::parse("=path-only").is_err());
        assert!(RepoSpec::parse("name-only=").is_err());
    }

    #[test]
    fn test_from_config_file_defaults_repo_to_config_root() {
        let file: ConfigFile = toml::from_str("config_root = \"/srv/pom-config\"\n").unwrap();
        let config = ConfguardConfig::from_config_file(file);
        assert_eq!(config.config_root, PathBuf::from("/srv/pom-config"));
        assert_eq!(
            config.repos,
            vec![RepoSpec::new("config", "/srv/pom-config")]
        );
    }

    #[test]
    fn test_from_config_file_with_sections() {
        let file: ConfigFile = toml::from_str(
            r#"
config_root = "configs"

[[repos]]
name = "config"
path = "configs"

[[repos]]
name = "docs"
path = "docs"

[logging]
format = "json"
filter = "confguard=debug"
"#,
        )
        .unwrap();
        let config = ConfguardConfig::from_config_file(file);
        assert_eq!(config.repos.len(), 2);
        assert_eq!(config.repos[1].name, "docs");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.filter.as_deref(), Some("confguard=debug"));
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        assert!(ConfguardConfig::load_from_file(std::path::Path::new("/nonexistent.toml")).is_err());
    }

    #[test]
    fn test_builders() {
        let config = ConfguardConfig::new()
            .with_config_root("configs")
            .with_repos(vec![RepoSpec::new("docs", "docs")]);
        assert_eq!(config.config_root, PathBuf::from("configs"));
        assert_eq!(config.repos.len(), 1);
    }
}
