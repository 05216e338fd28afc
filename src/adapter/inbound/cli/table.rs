//! Table rendering for scoop records.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::domain::report::{format_thousands, ReportLine};

#[derive(Tabled)]
struct ScoopTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Branch")]
    branch: String,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Price (IQD)")]
    price: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl From<&ReportLine> for ScoopTableRow {
    fn from(line: &ReportLine) -> Self {
        let fields = &line.record.fields;
        Self {
            id: line.record.id.to_string(),
            date: fields.date.clone(),
            branch: fields.branch.clone(),
            product: fields.product_name.clone(),
            unit: fields.unit.clone(),
            quantity: fields.quantity.to_string(),
            price: format_thousands(i128::from(fields.price_iqd)),
            total: format_thousands(line.total),
        }
    }
}

/// Render report lines as a table; numeric columns are right-aligned.
#[must_use]
pub fn render(lines: &[ReportLine]) -> String {
    let rows: Vec<ScoopTableRow> = lines.iter().map(ScoopTableRow::from).collect();
    Table::new(rows)
        .with(Style::sharp())
        .with(Modify::new(Columns::new(5..)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordId, RevenueReport, ScoopFields, ScoopRecord};

    #[test]
    fn table_shows_headers_and_grouped_totals() {
        let records = vec![ScoopRecord::new(
            RecordId::new(4),
            ScoopFields {
                date: "2024-05-01".into(),
                branch: "Main".into(),
                product_name: "Pistachio".into(),
                unit: "kg".into(),
                quantity: 12,
                price_iqd: 2500,
            },
        )];
        let report = RevenueReport::build(&records);
        let table = render(report.lines());

        for header in ["ID", "Date", "Branch", "Product", "Unit", "Qty", "Price (IQD)", "Total"] {
            assert!(table.contains(header), "missing {header}");
        }
        assert!(table.contains("Pistachio"));
        assert!(table.contains("2,500"));
        assert!(table.contains("30,000"));
    }
}
