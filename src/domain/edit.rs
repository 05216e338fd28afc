//! Edit sessions for rewriting a stored record.
//!
//! An [`EditSession`] carries the record being edited and the pending field
//! values through the form flow. It is an ordinary value owned by the
//! caller; the store never sees it, only the fields it commits.

use super::id::RecordId;
use super::scoop::{ScoopFields, ScoopRecord};
use super::validation::{self, ValidationError};

/// A single field change requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch {
    Date(String),
    Branch(String),
    ProductName(String),
    Unit(String),
    Quantity(i64),
    PriceIqd(i64),
}

impl FieldPatch {
    /// Column name the patch writes to.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Branch(_) => "branch",
            Self::ProductName(_) => "product_name",
            Self::Unit(_) => "unit",
            Self::Quantity(_) => "quantity",
            Self::PriceIqd(_) => "price_iqd",
        }
    }
}

/// An in-progress edit of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    record_id: RecordId,
    original: ScoopFields,
    pending: ScoopFields,
}

impl EditSession {
    /// Start editing a loaded record; pending values begin as the stored ones.
    #[must_use]
    pub fn begin(record: ScoopRecord) -> Self {
        Self {
            record_id: record.id,
            pending: record.fields.clone(),
            original: record.fields,
        }
    }

    #[must_use]
    pub const fn record_id(&self) -> RecordId {
        self.record_id
    }

    #[must_use]
    pub const fn pending(&self) -> &ScoopFields {
        &self.pending
    }

    #[must_use]
    pub const fn original(&self) -> &ScoopFields {
        &self.original
    }

    /// Apply a patch, returning the updated session.
    #[must_use]
    pub fn apply(mut self, patch: FieldPatch) -> Self {
        match patch {
            FieldPatch::Date(date) => self.pending.date = date,
            FieldPatch::Branch(branch) => self.pending.branch = branch,
            FieldPatch::ProductName(name) => self.pending.product_name = name,
            FieldPatch::Unit(unit) => self.pending.unit = unit,
            FieldPatch::Quantity(quantity) => self.pending.quantity = quantity,
            FieldPatch::PriceIqd(price) => self.pending.price_iqd = price,
        }
        self
    }

    /// Apply several patches in order.
    #[must_use]
    pub fn apply_all(self, patches: impl IntoIterator<Item = FieldPatch>) -> Self {
        patches.into_iter().fold(self, Self::apply)
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.pending != self.original
    }

    /// Names of fields whose pending value differs from the stored one.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let (a, b) = (&self.original, &self.pending);
        let mut changed = Vec::new();
        if a.date != b.date {
            changed.push("date");
        }
        if a.branch != b.branch {
            changed.push("branch");
        }
        if a.product_name != b.product_name {
            changed.push("product_name");
        }
        if a.unit != b.unit {
            changed.push("unit");
        }
        if a.quantity != b.quantity {
            changed.push("quantity");
        }
        if a.price_iqd != b.price_iqd {
            changed.push("price_iqd");
        }
        changed
    }

    /// Validate the pending values and hand back what the store should write.
    ///
    /// # Errors
    /// Returns the first failing form rule.
    pub fn commit(self) -> Result<(RecordId, ScoopFields), ValidationError> {
        let fields = validation::normalize(self.pending);
        validation::validate(&fields)?;
        Ok((self.record_id, fields))
    }
}
