//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::scoops;
use crate::domain::{RecordId, ScoopFields, ScoopRecord};

/// Database row for a scoop record (queryable).
///
/// Always loaded through `as_select()` so columns are matched by name; an
/// upgraded legacy table stores `unit` and `price_iqd` after `quantity`.
/// Legacy rows may hold NULL in any column but `id`; they read as empty text
/// or zero and are left as stored.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = scoops)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ScoopRow {
    pub id: i64,
    pub date: Option<String>,
    pub branch: Option<String>,
    pub product_name: Option<String>,
    pub unit: Option<String>,
    pub quantity: Option<i64>,
    pub price_iqd: Option<i64>,
}

/// Column values written on insert and update. `id` is left to SQLite.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = scoops)]
pub struct ScoopChangeset<'a> {
    pub date: &'a str,
    pub branch: &'a str,
    pub product_name: &'a str,
    pub unit: &'a str,
    pub quantity: i64,
    pub price_iqd: i64,
}

impl<'a> From<&'a ScoopFields> for ScoopChangeset<'a> {
    fn from(fields: &'a ScoopFields) -> Self {
        Self {
            date: &fields.date,
            branch: &fields.branch,
            product_name: &fields.product_name,
            unit: &fields.unit,
            quantity: fields.quantity,
            price_iqd: fields.price_iqd,
        }
    }
}

impl From<ScoopRow> for ScoopRecord {
    fn from(row: ScoopRow) -> Self {
        ScoopRecord::new(
            RecordId::new(row.id),
            ScoopFields {
                date: row.date.unwrap_or_default(),
                branch: row.branch.unwrap_or_default(),
                product_name: row.product_name.unwrap_or_default(),
                unit: row.unit.unwrap_or_default(),
                quantity: row.quantity.unwrap_or_default(),
                price_iqd: row.price_iqd.unwrap_or_default(),
            },
        )
    }
}
