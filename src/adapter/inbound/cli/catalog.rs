//! `catalog` handler.

use serde_json::json;

use super::output;
use crate::domain::Catalog;
use crate::error::Result;

/// Show the branches and units the forms offer.
pub fn execute(catalog: &Catalog) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "catalog",
            "branches": catalog.branches(),
            "units": catalog.units(),
        }));
        return Ok(());
    }

    output::section("Branches");
    for branch in catalog.branches() {
        output::lines(branch);
    }

    output::section("Units");
    for unit in catalog.unit_choices() {
        output::lines(&unit);
    }
    output::hint("change these under [catalog] in config.toml");
    Ok(())
}
