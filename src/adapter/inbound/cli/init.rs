//! `init` handler.

use std::path::Path;

use serde_json::json;

use super::output;
use crate::adapter::outbound::sqlite::SqliteScoopStore;
use crate::error::Result;
use crate::port::ScoopStore;

/// Create the table, apply pending column upgrades, and report where the
/// database lives.
pub fn execute(store: &SqliteScoopStore, database: &Path) -> Result<()> {
    store.initialize()?;
    store.upgrade_schema()?;
    let version = store.schema_version()?;
    let records = store.list_all()?.len();

    if output::is_json() {
        output::json_output(json!({
            "command": "init",
            "database": database.display().to_string(),
            "schema_version": version,
            "records": records,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::success("Database ready");
    output::field("Database", database.display());
    output::field("Schema", format!("v{version}"));
    output::field("Records", records);
    Ok(())
}
