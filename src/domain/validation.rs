//! Field rules applied by the presentation layer before calling the store.
//!
//! The store trusts its caller, so nothing here runs inside the store.

use thiserror::Error;

use super::scoop::ScoopFields;

/// Smallest quantity a form accepts.
pub const MIN_QUANTITY: i64 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product name must not be empty")]
    EmptyProductName,

    #[error("unit must not be empty")]
    EmptyUnit,

    #[error("branch must not be empty")]
    EmptyBranch,

    #[error("quantity must be at least 1, got {0}")]
    QuantityBelowMinimum(i64),

    #[error("price must not be negative, got {0}")]
    NegativePrice(i64),

    #[error("unknown branch '{branch}' (expected one of: {allowed})")]
    UnknownBranch { branch: String, allowed: String },
}

/// Check the form rules for a record about to be written.
///
/// # Errors
/// Returns the first rule that fails, in field order.
pub fn validate(fields: &ScoopFields) -> Result<(), ValidationError> {
    if fields.branch.trim().is_empty() {
        return Err(ValidationError::EmptyBranch);
    }
    if fields.product_name.trim().is_empty() {
        return Err(ValidationError::EmptyProductName);
    }
    if fields.unit.trim().is_empty() {
        return Err(ValidationError::EmptyUnit);
    }
    if fields.quantity < MIN_QUANTITY {
        return Err(ValidationError::QuantityBelowMinimum(fields.quantity));
    }
    if fields.price_iqd < 0 {
        return Err(ValidationError::NegativePrice(fields.price_iqd));
    }
    Ok(())
}

/// Trim surrounding whitespace from the free-text fields.
#[must_use]
pub fn normalize(mut fields: ScoopFields) -> ScoopFields {
    fields.date = fields.date.trim().to_string();
    fields.branch = fields.branch.trim().to_string();
    fields.product_name = fields.product_name.trim().to_string();
    fields.unit = fields.unit.trim().to_string();
    fields
}
