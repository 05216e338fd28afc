use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated directory holding a config file and database for one test.
///
/// Commands run with the directory as working directory and `HOME`, so no
/// user config, `.env`, or `SCOOPBOOK_DB` leaks in.
pub struct Workspace {
    dir: TempDir,
    config: PathBuf,
    db: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = dir.path().join("config.toml");
        std::fs::write(&config, content).expect("write config");
        let db = dir.path().join("data").join("scoops.db");
        Self { dir, config, db }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn db(&self) -> &Path {
        &self.db
    }

    /// `scoopbook --config <ws>/config.toml --db <ws>/data/scoops.db`.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("scoopbook");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env_remove("SCOOPBOOK_DB")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never")
            .arg("--config")
            .arg(&self.config)
            .arg("--db")
            .arg(&self.db);
        cmd
    }

    /// Add a record through the CLI and assert success.
    pub fn add(&self, date: &str, branch: &str, product: &str, unit: &str, qty: i64, price: i64) {
        self.cmd()
            .args(["add", "--date", date, "--branch", branch, "--product", product])
            .args(["--unit", unit])
            .args(["--quantity", &qty.to_string(), "--price", &price.to_string()])
            .assert()
            .success();
    }
}
