//! Database location and pool settings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable that overrides `database.path`.
pub const DATABASE_ENV: &str = "SCOOPBOOK_DB";

pub const DEFAULT_POOL_SIZE: u32 = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5000;

/// `[database]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file path; `~/` is expanded. `None` means the default location.
    pub path: Option<String>,
    pub busy_timeout_ms: u32,
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl DatabaseConfig {
    /// Resolve the database path, falling back to `default`.
    #[must_use]
    pub fn resolve_path(&self, default: &Path) -> PathBuf {
        self.path
            .as_deref()
            .map_or_else(|| default.to_path_buf(), expand_home)
    }
}

/// Expand a leading `~/` to the user's home directory.
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    }
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_path_unset() {
        let config = DatabaseConfig::default();
        assert!(config.path.is_none());
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
        assert_eq!(config.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
    }

    #[test]
    fn resolve_path_uses_default_when_unset() {
        let config = DatabaseConfig::default();
        let default = Path::new("/tmp/default.db");
        assert_eq!(config.resolve_path(default), default);
    }

    #[test]
    fn resolve_path_prefers_configured_path() {
        let config = DatabaseConfig {
            path: Some("/var/lib/scoops.db".to_string()),
            ..DatabaseConfig::default()
        };
        assert_eq!(
            config.resolve_path(Path::new("/tmp/default.db")),
            PathBuf::from("/var/lib/scoops.db")
        );
    }

    #[test]
    fn expand_home_only_touches_leading_tilde() {
        assert_eq!(expand_home("data/scoops.db"), PathBuf::from("data/scoops.db"));
        assert_eq!(expand_home("/a/~/b"), PathBuf::from("/a/~/b"));
        let expanded = expand_home("~/scoops.db");
        assert!(expanded.ends_with("scoops.db"));
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }
}
