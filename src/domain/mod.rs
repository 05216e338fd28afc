//! Scoop-sale domain: records, form rules, edit sessions, and reports.

pub mod catalog;
pub mod edit;
pub mod id;
pub mod report;
pub mod scoop;
pub mod validation;

pub use catalog::Catalog;
pub use edit::{EditSession, FieldPatch};
pub use id::RecordId;
pub use report::{ReportFilter, RevenueReport};
pub use scoop::{ScoopFields, ScoopRecord};
pub use validation::ValidationError;
