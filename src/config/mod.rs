//! Configuration management for `userbook`.
//!
//! Configuration is layered, later layers winning:
//! - Built-in defaults (`test.db`, swallow failures)
//! - YAML file (`--config <path>`, else `./userbook.yaml` if present)
//! - Environment variable overrides (`USERBOOK_*`)
//! - Command-line overrides

use crate::error::{Result, UserbookError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database file used when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "test.db";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "userbook.yaml";

pub const ENV_DATABASE: &str = "USERBOOK_DB";
pub const ENV_STRICT_EXIT: &str = "USERBOOK_STRICT_EXIT";
pub const ENV_LOG: &str = "USERBOOK_LOG";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Database file to open.
    pub database: PathBuf,
    /// Exit with a failure status after a reported error.
    pub strict_exit: bool,
    /// `tracing` filter directive (e.g. `info`, `userbook=debug`).
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            strict_exit: false,
            log_level: None,
        }
    }
}

/// Overrides supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub strict_exit: bool,
}

impl Config {
    /// Resolve configuration from file, process environment and CLI.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config file is missing or any config
    /// file fails to parse, or an environment value is malformed.
    pub fn load(overrides: &CliOverrides) -> Result<Self> {
        Self::load_with_env(overrides, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with an injectable environment lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with_env(
        overrides: &CliOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = match &overrides.config {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_file(implicit)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(env)?;
        config.apply_cli(overrides);
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Parse a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::Config` if the file cannot be read, or
    /// `UserbookError::Yaml` if it is not valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            UserbookError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&text)
    }

    /// Parse configuration from YAML text. An empty document yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::Yaml` on malformed YAML or unknown keys.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(db) = env(ENV_DATABASE).filter(|v| !v.trim().is_empty()) {
            self.database = PathBuf::from(db);
        }
        if let Some(raw) = env(ENV_STRICT_EXIT) {
            self.strict_exit = parse_bool(ENV_STRICT_EXIT, &raw)?;
        }
        if let Some(level) = env(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_level = Some(level);
        }
        Ok(())
    }

    fn apply_cli(&mut self, overrides: &CliOverrides) {
        if let Some(db) = &overrides.database {
            self.database.clone_from(db);
        }
        if overrides.strict_exit {
            self.strict_exit = true;
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(UserbookError::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_match_classic_behavior() {
        let config = Config::default();
        assert_eq!(config.database, PathBuf::from("test.db"));
        assert!(!config.strict_exit);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let config = Config::from_yaml("strict_exit: true\n").unwrap();
        assert!(config.strict_exit);
        assert_eq!(config.database, PathBuf::from(DEFAULT_DATABASE));
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn yaml_rejects_unknown_keys() {
        let err = Config::from_yaml("databse: typo.db\n").unwrap_err();
        assert!(matches!(err, UserbookError::Yaml(_)));
    }

    #[test]
    fn explicit_missing_config_is_error() {
        let overrides = CliOverrides {
            config: Some(PathBuf::from("/nonexistent/userbook.yaml")),
            ..CliOverrides::default()
        };
        let err = Config::load_with_env(&overrides, no_env).unwrap_err();
        assert!(matches!(err, UserbookError::Config(_)));
    }

    #[test]
    fn layers_apply_in_order() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("custom.yaml");
        fs::write(&file, "database: from-file.db\nlog_level: info\n").unwrap();

        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_DATABASE, "from-env.db"), (ENV_STRICT_EXIT, "yes")]);
        let lookup = |key: &str| env.get(key).map(ToString::to_string);

        let overrides = CliOverrides {
            config: Some(file.clone()),
            ..CliOverrides::default()
        };
        let config = Config::load_with_env(&overrides, lookup).unwrap();
        assert_eq!(config.database, PathBuf::from("from-env.db"));
        assert!(config.strict_exit);
        assert_eq!(config.log_level.as_deref(), Some("info"));

        let overrides = CliOverrides {
            config: Some(file),
            database: Some(PathBuf::from("from-cli.db")),
            strict_exit: false,
        };
        let config = Config::load_with_env(&overrides, lookup).unwrap();
        assert_eq!(config.database, PathBuf::from("from-cli.db"));
        assert!(config.strict_exit, "CLI flag absent keeps env value");
    }

    #[test]
    fn malformed_env_bool_is_error() {
        let overrides = CliOverrides {
            config: Some(PathBuf::from("/dev/null")),
            ..CliOverrides::default()
        };
        let lookup = |key: &str| (key == ENV_STRICT_EXIT).then(|| "maybe".to_string());
        let err = Config::load_with_env(&overrides, lookup).unwrap_err();
        assert!(err.to_string().contains(ENV_STRICT_EXIT));
    }
}
