//! Revenue report over a set of scoop records.
//!
//! Totals are derived at read time from `quantity * price_iqd` and summed
//! in `i128`, so the grand total is exact for any stored `i64` values.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::scoop::ScoopRecord;
use crate::error::{Error, Result};

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 8] = [
    "ID",
    "Date",
    "Branch",
    "Product Name",
    "Unit",
    "Quantity",
    "Price (IQD)",
    "Total",
];

/// Label written in the product column of the CSV summary row.
pub const GRAND_TOTAL_LABEL: &str = "Grand Total";

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "scoop_inventory_report.csv";

/// Restricts which records a report covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Only records from this branch (case-insensitive).
    pub branch: Option<String>,
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub to: Option<NaiveDate>,
}

impl ReportFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branch.is_none() && self.from.is_none() && self.to.is_none()
    }

    /// Whether a record falls inside the filter.
    ///
    /// Records whose date is not `YYYY-MM-DD` are excluded as soon as a date
    /// bound is set, since they cannot be placed in the range.
    #[must_use]
    pub fn matches(&self, record: &ScoopRecord) -> bool {
        if let Some(branch) = &self.branch {
            if !record.fields.branch.eq_ignore_ascii_case(branch.trim()) {
                return false;
            }
        }

        if self.from.is_none() && self.to.is_none() {
            return true;
        }

        let Ok(date) = NaiveDate::parse_from_str(record.fields.date.trim(), "%Y-%m-%d") else {
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// Serialize an `i128` amount as a decimal string.
///
/// JSON numbers stop at 64 bits; a string keeps every total exact.
fn as_decimal<S>(value: &i128, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

/// One report row: a record and its derived total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    #[serde(flatten)]
    pub record: ScoopRecord,
    #[serde(serialize_with = "as_decimal")]
    pub total: i128,
}

/// Per-line totals plus the grand total for a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueReport {
    lines: Vec<ReportLine>,
    #[serde(serialize_with = "as_decimal")]
    grand_total: i128,
}

impl RevenueReport {
    /// Build a report over every given record, keeping their order.
    #[must_use]
    pub fn build(records: &[ScoopRecord]) -> Self {
        Self::build_filtered(records, &ReportFilter::default())
    }

    /// Build a report over the records that match `filter`.
    #[must_use]
    pub fn build_filtered(records: &[ScoopRecord], filter: &ReportFilter) -> Self {
        let lines: Vec<ReportLine> = records
            .iter()
            .filter(|record| filter.matches(record))
            .map(|record| ReportLine {
                record: record.clone(),
                total: record.total(),
            })
            .collect();
        let grand_total = lines.iter().map(|line| line.total).sum();
        Self { lines, grand_total }
    }

    #[must_use]
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    #[must_use]
    pub const fn grand_total(&self) -> i128 {
        self.grand_total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Revenue per branch, ordered by branch name.
    #[must_use]
    pub fn branch_subtotals(&self) -> Vec<(String, i128)> {
        let mut subtotals: BTreeMap<&str, i128> = BTreeMap::new();
        for line in &self.lines {
            *subtotals.entry(line.record.fields.branch.as_str()).or_default() += line.total;
        }
        subtotals
            .into_iter()
            .map(|(branch, total)| (branch.to_string(), total))
            .collect()
    }

    /// Write the report as CSV: header, one row per line, then the grand total.
    ///
    /// # Errors
    /// Returns an error if the writer fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(CSV_HEADER)?;

        for line in &self.lines {
            let fields = &line.record.fields;
            csv.write_record([
                line.record.id.to_string(),
                fields.date.clone(),
                fields.branch.clone(),
                fields.product_name.clone(),
                fields.unit.clone(),
                fields.quantity.to_string(),
                fields.price_iqd.to_string(),
                line.total.to_string(),
            ])?;
        }

        let grand_total = self.grand_total.to_string();
        csv.write_record(["", "", "", GRAND_TOTAL_LABEL, "", "", "", grand_total.as_str()])?;
        csv.flush()?;
        Ok(())
    }

    /// Render the CSV export into a string.
    ///
    /// # Errors
    /// Returns an error if CSV encoding fails.
    pub fn to_csv(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Parse(e.to_string()))
    }
}

/// Group digits in thousands: `29000` becomes `"29,000"`.
#[must_use]
pub fn format_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Format an amount as dinar: `29000` becomes `"29,000 IQD"`.
#[must_use]
pub fn format_iqd(value: i128) -> String {
    format!("{} IQD", format_thousands(value))
}
