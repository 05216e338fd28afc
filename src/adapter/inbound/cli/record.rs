//! `add`, `list`, `edit` and `delete` handlers.

use std::io::IsTerminal;

use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::debug;

use super::command::{AddArgs, EditArgs};
use super::{form, output, table};
use crate::domain::validation::{self, MIN_QUANTITY};
use crate::domain::{Catalog, EditSession, FieldPatch, RecordId, RevenueReport, ScoopFields};
use crate::error::Result;
use crate::port::ScoopStore;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Field values taken from flags, with defaults for what is missing.
///
/// Product and unit stay blank when absent so validation reports them.
fn fields_from_args(catalog: &Catalog, args: &AddArgs) -> ScoopFields {
    ScoopFields {
        date: args.date.unwrap_or_else(today).to_string(),
        branch: args
            .branch
            .clone()
            .or_else(|| catalog.branches().first().cloned())
            .unwrap_or_default(),
        product_name: args.product.clone().unwrap_or_default(),
        unit: args.unit.clone().unwrap_or_default(),
        quantity: args.quantity.unwrap_or(MIN_QUANTITY),
        price_iqd: args.price.unwrap_or(0),
    }
}

fn wants_form(interactive: bool, missing_required: bool) -> bool {
    if output::is_json() {
        return false;
    }
    interactive || (missing_required && std::io::stdin().is_terminal())
}

/// Resolve the branch against the catalog, then normalize and validate.
fn prepare(catalog: &Catalog, fields: ScoopFields) -> Result<ScoopFields> {
    let mut fields = validation::normalize(fields);
    if fields.branch.is_empty() {
        validation::validate(&fields)?;
    }
    fields.branch = catalog.resolve_branch(&fields.branch)?;
    validation::validate(&fields)?;
    Ok(fields)
}

/// Record a new sale.
pub fn add(store: &impl ScoopStore, catalog: &Catalog, args: &AddArgs) -> Result<RecordId> {
    let mut fields = fields_from_args(catalog, args);
    if wants_form(args.interactive, args.product.is_none() || args.unit.is_none()) {
        fields = form::prompt(catalog, &fields)?;
    }
    let fields = prepare(catalog, fields)?;

    let id = store.insert(&fields)?;
    debug!(%id, "record added");

    if output::is_json() {
        output::json_output(json!({
            "command": "add",
            "id": id,
            "record": fields,
        }));
    } else {
        output::success(&format!(
            "Added record {} ({} x{} {})",
            output::highlight(format!("#{id}")),
            fields.product_name,
            fields.quantity,
            fields.unit
        ));
    }
    Ok(id)
}

/// Print every sale, newest first.
pub fn list(store: &impl ScoopStore) -> Result<()> {
    let report = RevenueReport::build(&store.list_all()?);

    if output::is_json() {
        for line in report.lines() {
            output::json_output(serde_json::to_value(line)?);
        }
        return Ok(());
    }

    if report.is_empty() {
        output::note("No scoop records found yet.");
        return Ok(());
    }

    output::section("All scoop records");
    output::lines(&table::render(report.lines()));
    Ok(())
}

fn patches_from_args(args: &EditArgs) -> Vec<FieldPatch> {
    let mut patches = Vec::new();
    if let Some(date) = args.date {
        patches.push(FieldPatch::Date(date.to_string()));
    }
    if let Some(branch) = &args.branch {
        patches.push(FieldPatch::Branch(branch.clone()));
    }
    if let Some(product) = &args.product {
        patches.push(FieldPatch::ProductName(product.clone()));
    }
    if let Some(unit) = &args.unit {
        patches.push(FieldPatch::Unit(unit.clone()));
    }
    if let Some(quantity) = args.quantity {
        patches.push(FieldPatch::Quantity(quantity));
    }
    if let Some(price) = args.price {
        patches.push(FieldPatch::PriceIqd(price));
    }
    patches
}

/// Rewrite an existing sale.
///
/// A missing id is reported as a warning and is not an error.
pub fn edit(store: &impl ScoopStore, catalog: &Catalog, args: &EditArgs) -> Result<()> {
    let Some(record) = store.get(args.id)? else {
        output::warning(&format!("No record with id {}", args.id));
        return Ok(());
    };

    let mut session = EditSession::begin(record).apply_all(patches_from_args(args));
    if wants_form(args.interactive, false) {
        let fields = form::prompt(catalog, session.pending())?;
        session = session.apply_all(form::into_patches(fields));
    }

    let changed = session.changed_fields();
    if changed.is_empty() {
        output::note("Nothing to change.");
        return Ok(());
    }

    // Branch changes must name a catalog branch; an untouched legacy value is kept.
    let branch_changed = changed.contains(&"branch");
    let (id, mut fields) = session.commit()?;
    if branch_changed {
        fields.branch = catalog.resolve_branch(&fields.branch)?;
    }
    store.update(id, &fields)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "edit",
            "id": id,
            "changed": changed,
            "record": fields,
        }));
    } else {
        output::success(&format!(
            "Updated record {} ({})",
            output::highlight(format!("#{id}")),
            changed.join(", ")
        ));
    }
    Ok(())
}

/// Delete a sale. Deleting a missing id is not an error.
pub fn delete(store: &impl ScoopStore, id: RecordId) -> Result<()> {
    store.delete(id)?;

    if output::is_json() {
        output::json_output(json!({ "command": "delete", "id": id }));
    } else {
        output::success(&format!("Deleted record {}", output::highlight(format!("#{id}"))));
    }
    Ok(())
}
