//! Application configuration loading and validation.
//!
//! [`Config`] gathers the `[database]`, `[logging]` and `[catalog]`
//! sections of `config.toml`. Every section is optional. The database path
//! can be overridden with `SCOOPBOOK_DB`.
//!
//! # Example
//!
//! ```no_run
//! use scoopbook::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init(0);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::catalog::CatalogConfig;
use super::database::{DatabaseConfig, DATABASE_ENV};
use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Parse configuration from TOML text, apply environment overrides, and
    /// validate.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidValue`] for values that fail validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(std::env::var(DATABASE_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`ConfigError::ReadFile`] when the file cannot be read, plus
    /// everything [`Config::parse_toml`] can return.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when it exists, otherwise start from defaults.
    ///
    /// Used for the default config location, which is allowed to be absent.
    ///
    /// # Errors
    /// Same as [`Config::load`] when the file exists.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Self::parse_toml("")
    }

    /// Apply the database path override, if any. Blank values are ignored.
    pub fn apply_overrides(&mut self, database_path: Option<String>) {
        if let Some(path) = database_path.filter(|p| !p.trim().is_empty()) {
            self.database.path = Some(path);
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pool_size",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self
            .database
            .path
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "path",
                reason: "must not be blank".into(),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!(
                    "expected one of {}, got {:?}",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }
        if self.catalog.branches.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "branches",
                reason: "at least one branch is required".into(),
            }
            .into());
        }
        if self.catalog.branches.iter().any(|b| b.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "branches",
                reason: "entries must not be blank".into(),
            }
            .into());
        }
        if self.catalog.units.iter().any(|u| u.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "units",
                reason: "entries must not be blank".into(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse(content: &str) -> Result<Config> {
        let mut config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(None);
        config.validate()?;
        Ok(config)
    }

    fn invalid_field(result: Result<Config>) -> &'static str {
        match result {
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) => field,
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn example_file_matches_defaults() {
        let example = include_str!("../../../config.toml.example");
        assert_eq!(parse(example).unwrap(), Config::default());
    }

    #[test]
    fn full_file_parses() {
        let config = parse(
            r#"
            [database]
            path = "/data/scoops.db"
            busy_timeout_ms = 250
            pool_size = 2

            [logging]
            level = "info"
            format = "json"

            [catalog]
            branches = ["Main", "Airport"]
            units = ["cone"]
            "#,
        )
        .unwrap();

        assert_eq!(config.database.path.as_deref(), Some("/data/scoops.db"));
        assert_eq!(config.database.busy_timeout_ms, 250);
        assert_eq!(config.database.pool_size, 2);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.catalog.branches, ["Main", "Airport"]);
        assert_eq!(config.catalog.units, ["cone"]);
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let result = parse("[database]\npool_size = 0\n");
        assert_eq!(invalid_field(result), "pool_size");
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result = parse("[logging]\nformat = \"xml\"\n");
        assert_eq!(invalid_field(result), "format");
    }

    #[test]
    fn empty_branch_list_is_rejected() {
        let result = parse("[catalog]\nbranches = []\n");
        assert_eq!(invalid_field(result), "branches");
    }

    #[test]
    fn blank_unit_is_rejected() {
        let result = parse("[catalog]\nunits = [\"kg\", \"  \"]\n");
        assert_eq!(invalid_field(result), "units");
    }

    #[test]
    fn empty_unit_list_is_allowed() {
        let config = parse("[catalog]\nunits = []\n").unwrap();
        assert!(config.catalog.units.is_empty());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = parse("[database\npool_size = 1");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn override_replaces_path() {
        let mut config = Config::default();
        config.apply_overrides(Some("/tmp/override.db".to_string()));
        assert_eq!(config.database.path.as_deref(), Some("/tmp/override.db"));

        config.apply_overrides(Some("   ".to_string()));
        assert_eq!(config.database.path.as_deref(), Some("/tmp/override.db"));
    }

    #[test]
    fn missing_explicit_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }

    #[test]
    fn missing_default_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("config.toml")).unwrap();
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\nbranches = [\"Kiosk\"]\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.catalog.branches, ["Kiosk"]);
    }
}
