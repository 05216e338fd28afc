//! Configuration sections and loading.

pub mod catalog;
pub mod database;
pub mod logging;
pub mod settings;

pub use settings::Config;
