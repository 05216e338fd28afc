//! Scoopbook - ice cream scoop sales ledger.
//!
//! Records scoop sales (date, branch, product, unit, quantity, unit price in
//! IQD) in a local SQLite database, and reports revenue with a CSV export.
//!
//! # Architecture
//!
//! - [`domain`] - Records, form rules, edit sessions, revenue reports
//! - [`port`] - The [`port::ScoopStore`] persistence contract
//! - [`adapter`] - SQLite store (outbound) and the `scoopbook` CLI (inbound)
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use scoopbook::adapter::outbound::sqlite::database::connection::PoolOptions;
//! use scoopbook::adapter::outbound::sqlite::SqliteScoopStore;
//! use scoopbook::domain::{RevenueReport, ScoopFields};
//! use scoopbook::port::ScoopStore;
//!
//! fn main() -> scoopbook::error::Result<()> {
//!     let store = SqliteScoopStore::open_ready("scoops.db", PoolOptions::default())?;
//!     store.insert(&ScoopFields {
//!         date: "2024-05-01".into(),
//!         branch: "Main".into(),
//!         product_name: "Vanilla".into(),
//!         unit: "kg".into(),
//!         quantity: 3,
//!         price_iqd: 5000,
//!     })?;
//!     let report = RevenueReport::build(&store.list_all()?);
//!     println!("{}", report.grand_total());
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
