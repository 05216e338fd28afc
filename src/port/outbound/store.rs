//! Persistence port for scoop records.

use crate::domain::{RecordId, ScoopFields, ScoopRecord};
use crate::error::Result;

/// Durable storage for scoop sale records.
///
/// Every mutating call is its own unit of work and is committed before it
/// returns. Deleting or updating an id that does not exist succeeds and
/// changes nothing.
pub trait ScoopStore {
    /// Ensure the record table exists with the full column set.
    fn initialize(&self) -> Result<()>;

    /// Add any columns an older table is missing. Safe to call repeatedly.
    fn upgrade_schema(&self) -> Result<()>;

    /// Append a record and return its freshly assigned id.
    fn insert(&self, fields: &ScoopFields) -> Result<RecordId>;

    /// All records, newest date first, ties broken by id descending.
    fn list_all(&self) -> Result<Vec<ScoopRecord>>;

    /// A single record, if it exists.
    fn get(&self, id: RecordId) -> Result<Option<ScoopRecord>>;

    /// Remove a record. No-op when absent.
    fn delete(&self, id: RecordId) -> Result<()>;

    /// Overwrite every field of a record. No-op when absent.
    fn update(&self, id: RecordId, fields: &ScoopFields) -> Result<()>;
}
