//! Default file locations.
//!
//! Everything lives under `~/.scoopbook/`:
//! - `~/.scoopbook/config.toml` - configuration
//! - `~/.scoopbook/scoopbook.db` - sales database

use std::path::{Path, PathBuf};

/// Returns the scoopbook home directory (`~/.scoopbook/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".scoopbook")
}

/// Returns the default config file path (`~/.scoopbook/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.scoopbook/scoopbook.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("scoopbook.db")
}

/// Create the parent directory of a database file if it is missing.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_scoopbook_home() {
        assert!(home_dir().to_string_lossy().contains(".scoopbook"));
        assert!(default_config().ends_with(".scoopbook/config.toml"));
        assert!(default_database().ends_with(".scoopbook/scoopbook.db"));
    }

    #[test]
    fn ensure_parent_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("a/b/scoops.db");
        ensure_parent_dir(&db).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn bare_file_name_needs_no_dir() {
        ensure_parent_dir(Path::new("scoops.db")).unwrap();
    }
}
