//! CLI module graph.

pub mod app;
pub mod catalog;
pub mod command;
pub mod diagnostic;
pub mod form;
pub mod init;
pub mod output;
pub mod paths;
pub mod record;
pub mod report;
pub mod table;
