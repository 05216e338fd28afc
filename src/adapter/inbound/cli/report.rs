//! `report` handler: totals, branch subtotals, and CSV export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::json;

use super::command::ReportArgs;
use super::{output, table};
use crate::domain::report::format_iqd;
use crate::domain::{ReportFilter, RevenueReport};
use crate::error::Result;
use crate::port::ScoopStore;

fn filter_from_args(args: &ReportArgs) -> ReportFilter {
    ReportFilter {
        branch: args.branch.clone(),
        from: args.from,
        to: args.to,
    }
}

/// Write the CSV export to `path`, replacing any existing file.
pub fn export_csv(report: &RevenueReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    report.write_csv(BufWriter::new(file))
}

/// Print the revenue report and optionally export it.
pub fn execute(store: &impl ScoopStore, args: &ReportArgs) -> Result<RevenueReport> {
    let filter = filter_from_args(args);
    let report = RevenueReport::build_filtered(&store.list_all()?, &filter);

    if let Some(path) = &args.export {
        export_csv(&report, path)?;
    }

    if output::is_json() {
        let subtotals: Vec<_> = report
            .branch_subtotals()
            .into_iter()
            .map(|(branch, total)| json!({ "branch": branch, "total": total.to_string() }))
            .collect();
        output::json_output(json!({
            "command": "report",
            "records": serde_json::to_value(report.lines())?,
            "subtotals": subtotals,
            "grand_total": report.grand_total().to_string(),
            "exported_to": args.export.as_ref().map(|p| p.display().to_string()),
        }));
        return Ok(report);
    }

    output::section("Revenue report");
    if !filter.is_empty() {
        if let Some(branch) = &filter.branch {
            output::field("Branch", branch);
        }
        if let Some(from) = filter.from {
            output::field("From", from);
        }
        if let Some(to) = filter.to {
            output::field("To", to);
        }
    }

    if report.is_empty() {
        output::note("No scoop records found yet.");
    } else {
        output::lines(&table::render(report.lines()));

        output::section("By branch");
        for (branch, total) in report.branch_subtotals() {
            output::field(&branch, format_iqd(total));
        }
    }

    output::section("Summary");
    output::field("Total Revenue", output::highlight(format_iqd(report.grand_total())));

    if let Some(path) = &args.export {
        output::success(&format!(
            "Exported {} records to {}",
            report.lines().len(),
            path.display()
        ));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::adapter::outbound::sqlite::database::connection::{PoolOptions, MEMORY_URL};
    use crate::adapter::outbound::sqlite::SqliteScoopStore;
    use crate::domain::ScoopFields;

    fn seeded_store() -> SqliteScoopStore {
        let store = SqliteScoopStore::open_ready(MEMORY_URL, PoolOptions::default()).unwrap();
        for (date, branch, product, qty, price) in [
            ("2024-05-01", "Main", "Vanilla", 3, 5000),
            ("2024-05-02", "Masif", "Mango", 2, 7000),
            ("2024-06-10", "Main", "Lemon", 1, 4000),
        ] {
            store
                .insert(&ScoopFields {
                    date: date.into(),
                    branch: branch.into(),
                    product_name: product.into(),
                    unit: "kg".into(),
                    quantity: qty,
                    price_iqd: price,
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn unfiltered_report_sums_everything() {
        let report = execute(&seeded_store(), &ReportArgs::default()).unwrap();
        assert_eq!(report.grand_total(), 15_000 + 14_000 + 4_000);
        assert_eq!(report.lines().len(), 3);
    }

    #[test]
    fn filters_narrow_the_report() {
        let args = ReportArgs {
            branch: Some("main".into()),
            to: NaiveDate::from_ymd_opt(2024, 5, 31),
            ..ReportArgs::default()
        };
        let report = execute(&seeded_store(), &args).unwrap();
        assert_eq!(report.grand_total(), 15_000);
    }

    #[test]
    fn export_writes_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let args = ReportArgs {
            export: Some(path.clone()),
            ..ReportArgs::default()
        };
        execute(&seeded_store(), &args).unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Date,Branch,Product Name,Unit,Quantity,Price (IQD),Total")
        );
        assert_eq!(csv.lines().last(), Some(",,,Grand Total,,,,33000"));
    }
}
