//! Append-only storage for payroll records.
//!
//! The [`RecordStore`] trait is the seam between the HTTP layer and whatever
//! persists paystubs. [`InMemoryRecordStore`] is the implementation used by
//! the server binary and the tests.

mod memory;

pub use memory::InMemoryRecordStore;

use crate::error::ServiceResult;
use crate::models::{NewPayrollRecord, PayrollRecord};

/// Direction for time-ordered reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest record first.
    Ascending,
    /// Newest record first.
    Descending,
}

/// An append-only collection of payroll records.
///
/// Records are stamped with an id and insertion time on append and are never
/// mutated or removed afterwards.
pub trait RecordStore: Send + Sync {
    /// Appends a record, returning the stored version.
    fn append(&self, record: NewPayrollRecord) -> ServiceResult<PayrollRecord>;

    /// Returns every record ordered by insertion time.
    fn fetch_all_ordered_by_time(&self, order: SortOrder) -> ServiceResult<Vec<PayrollRecord>>;

    /// Returns at most `limit` records, newest first.
    fn fetch_recent(&self, limit: usize) -> ServiceResult<Vec<PayrollRecord>> {
        let mut records = self.fetch_all_ordered_by_time(SortOrder::Descending)?;
        records.truncate(limit);
        Ok(records)
    }

    /// Returns the number of stored records.
    fn len(&self) -> ServiceResult<usize>;

    /// Returns true if nothing has been stored yet.
    fn is_empty(&self) -> ServiceResult<bool> {
        Ok(self.len()? == 0)
    }
}
