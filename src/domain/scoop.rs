//! Scoop sale records.

use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// Caller-supplied fields of a scoop sale.
///
/// This is what the presentation layer hands to the store on insert and
/// update. The store accepts any values; see [`super::validation`] for the
/// rules the presentation layer applies first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoopFields {
    /// Sale date as text, normally `YYYY-MM-DD`.
    pub date: String,
    /// Sales location label.
    pub branch: String,
    pub product_name: String,
    /// Unit of measure (kg, litre, piece, ...).
    pub unit: String,
    pub quantity: i64,
    /// Unit price in Iraqi dinar.
    pub price_iqd: i64,
}

impl ScoopFields {
    /// Revenue for this sale: `quantity * price_iqd`.
    #[must_use]
    pub fn total(&self) -> i128 {
        i128::from(self.quantity) * i128::from(self.price_iqd)
    }
}

/// A stored scoop sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoopRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: ScoopFields,
}

impl ScoopRecord {
    #[must_use]
    pub fn new(id: RecordId, fields: ScoopFields) -> Self {
        Self { id, fields }
    }

    /// Derived revenue, computed on read and never persisted.
    #[must_use]
    pub fn total(&self) -> i128 {
        self.fields.total()
    }

    #[must_use]
    pub fn fields(&self) -> &ScoopFields {
        &self.fields
    }
}
