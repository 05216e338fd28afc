//! Command dispatch: load config, open the store, run the subcommand.

use std::path::PathBuf;

use tracing::debug;

use super::command::{Cli, Commands};
use super::{catalog, diagnostic, init, output, paths, record, report};
use crate::adapter::outbound::sqlite::database::connection::PoolOptions;
use crate::adapter::outbound::sqlite::SqliteScoopStore;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::database::DatabaseConfig;
use crate::infrastructure::config::Config;

/// Load the config file named on the command line, or the default one.
///
/// # Errors
/// A missing file is only an error when `--config` was given.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (path, required) = cli.config_path();
    if required {
        Config::load(&path)
    } else {
        Config::load_or_default(&path)
    }
}

/// Database file for this invocation: `--db`, then config and
/// `SCOOPBOOK_DB`, then `~/.scoopbook/scoopbook.db`.
#[must_use]
pub fn database_path(cli: &Cli, config: &Config) -> PathBuf {
    cli.db
        .clone()
        .unwrap_or_else(|| config.database.resolve_path(&paths::default_database()))
}

fn pool_options(database: &DatabaseConfig) -> PoolOptions {
    PoolOptions {
        max_size: database.pool_size,
        busy_timeout_ms: database.busy_timeout_ms,
    }
}

/// Run one CLI invocation.
///
/// # Errors
/// Returns config, validation, and storage failures for the caller to print.
pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    config.logging.init(cli.verbose);

    let database = database_path(cli, &config);
    paths::ensure_parent_dir(&database)?;
    debug!(database = %database.display(), "opening store");

    let url = database.to_string_lossy();
    let store = SqliteScoopStore::open_ready(&url, pool_options(&config.database))?;
    let catalog = config.catalog.to_catalog();

    match &cli.command {
        Commands::Init => init::execute(&store, &database),
        Commands::Add(args) => record::add(&store, &catalog, args).map(|_| ()),
        Commands::List => record::list(&store),
        Commands::Edit(args) => record::edit(&store, &catalog, args),
        Commands::Delete(args) => record::delete(&store, args.id),
        Commands::Report(args) => report::execute(&store, args).map(|_| ()),
        Commands::Catalog => catalog::execute(&catalog),
    }
}

/// Print a failed invocation's error.
///
/// TOML syntax errors are shown with the offending line when the file can
/// be re-read; everything else goes through [`output::error`].
pub fn report_error(cli: &Cli, err: &Error) {
    if let Error::Config(ConfigError::Parse(parse)) = err {
        if !output::is_json() {
            let (path, _) = cli.config_path();
            if let Some(rendered) = diagnostic::render_parse_error(&path, parse) {
                eprintln!("{rendered}");
                return;
            }
        }
    }
    output::error(&err.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn db_flag_wins_over_config() {
        let cli = Cli::parse_from(["scoopbook", "--db", "/tmp/flag.db", "list"]);
        let mut config = Config::default();
        config.database.path = Some("/tmp/config.db".to_string());
        assert_eq!(database_path(&cli, &config), PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn config_path_used_without_flag() {
        let cli = Cli::parse_from(["scoopbook", "list"]);
        let mut config = Config::default();
        config.database.path = Some("/tmp/config.db".to_string());
        assert_eq!(database_path(&cli, &config), PathBuf::from("/tmp/config.db"));
    }

    #[test]
    fn default_database_section_matches_pool_defaults() {
        assert_eq!(
            pool_options(&DatabaseConfig::default()),
            PoolOptions::default()
        );

        let tuned = DatabaseConfig {
            pool_size: 2,
            busy_timeout_ms: 250,
            ..DatabaseConfig::default()
        };
        assert_eq!(
            pool_options(&tuned),
            PoolOptions {
                max_size: 2,
                busy_timeout_ms: 250
            }
        );
    }

    #[test]
    fn run_against_temp_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested/scoops.db");
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();

        let cli = Cli::parse_from([
            "scoopbook",
            "--quiet",
            "--config",
            config.to_str().unwrap(),
            "--db",
            db.to_str().unwrap(),
            "init",
        ]);
        run(&cli).unwrap();
        assert!(db.exists());
    }

    #[test]
    fn missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "scoopbook",
            "--config",
            dir.path().join("absent.toml").to_str().unwrap(),
            "catalog",
        ]);
        assert!(matches!(
            load_config(&cli),
            Err(Error::Config(ConfigError::ReadFile(_)))
        ));
    }
}
