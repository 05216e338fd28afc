//! Command-line interface definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use super::paths;
use crate::domain::report::DEFAULT_EXPORT_FILE;
use crate::domain::RecordId;

/// Ice cream scoop sales ledger
#[derive(Parser, Debug)]
#[command(name = "scoopbook")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database (overrides config and SCOOPBOOK_DB)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file to read and whether it must exist.
    #[must_use]
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (paths::default_config(), false),
        }
    }
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// `None` leaves the decision to terminal detection.
    #[must_use]
    pub const fn forced(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or upgrade the database
    Init,

    /// Record a scoop sale
    Add(AddArgs),

    /// List all sales, newest first
    List,

    /// Change fields of an existing sale
    Edit(EditArgs),

    /// Delete a sale
    Delete(DeleteArgs),

    /// Revenue report with totals and optional CSV export
    Report(ReportArgs),

    /// Show the configured branches and units
    Catalog,
}

/// Arguments for `scoopbook add`.
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Sale date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Branch, one of the configured branches
    #[arg(long)]
    pub branch: Option<String>,

    /// Product name
    #[arg(long)]
    pub product: Option<String>,

    /// Unit of measure
    #[arg(long)]
    pub unit: Option<String>,

    /// Quantity sold
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    /// Unit price in IQD
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<i64>,

    /// Prompt for each field
    #[arg(short, long)]
    pub interactive: bool,
}

/// Arguments for `scoopbook edit`.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Record id
    pub id: RecordId,

    /// New sale date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// New branch, one of the configured branches
    #[arg(long)]
    pub branch: Option<String>,

    /// New product name
    #[arg(long)]
    pub product: Option<String>,

    /// New unit of measure
    #[arg(long)]
    pub unit: Option<String>,

    /// New quantity sold
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    /// New unit price in IQD
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<i64>,

    /// Prompt for each field, prefilled with the current values
    #[arg(short, long)]
    pub interactive: bool,
}

/// Arguments for `scoopbook delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record id
    pub id: RecordId,
}

/// Arguments for `scoopbook report`.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Only include this branch
    #[arg(long)]
    pub branch: Option<String>,

    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Write the report as CSV to this file
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPORT_FILE
    )]
    pub export: Option<PathBuf>,
}
