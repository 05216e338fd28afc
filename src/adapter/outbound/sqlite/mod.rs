//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed scoop record store, its Diesel schema, and
//! the additive schema upgrade steps.

pub mod database;
pub mod store;
pub mod upgrade;

pub use store::SqliteScoopStore;
