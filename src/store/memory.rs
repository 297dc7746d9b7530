//! In-memory record store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewPayrollRecord, PayrollRecord};

use super::{RecordStore, SortOrder};

/// A [`RecordStore`] held in process memory.
///
/// Records are kept in append order. Insertion timestamps never go
/// backwards: if the wall clock regresses, the previous record's timestamp is
/// reused and the id keeps the order unambiguous.
///
/// # Example
///
/// ```
/// use paycheck_digest::models::NewPayrollRecord;
/// use paycheck_digest::store::{InMemoryRecordStore, RecordStore, SortOrder};
///
/// let store = InMemoryRecordStore::new();
/// store.append(NewPayrollRecord {
///     period_start: "2025-04-01".to_string(),
///     period_end: "2025-04-14".to_string(),
///     gross_pay: 150.0,
///     net_pay: 100.0,
///     taxes: None,
/// })?;
///
/// let all = store.fetch_all_ordered_by_time(SortOrder::Ascending)?;
/// assert_eq!(all.len(), 1);
/// assert_eq!(all[0].id, 1);
/// # Ok::<(), paycheck_digest::error::ServiceError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<PayrollRecord>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ServiceResult<RwLockReadGuard<'_, Vec<PayrollRecord>>> {
        self.records
            .read()
            .map_err(|e| ServiceError::StoreUnavailable {
                message: e.to_string(),
            })
    }

    fn write(&self) -> ServiceResult<RwLockWriteGuard<'_, Vec<PayrollRecord>>> {
        self.records
            .write()
            .map_err(|e| ServiceError::StoreUnavailable {
                message: e.to_string(),
            })
    }
}

impl RecordStore for InMemoryRecordStore {
    fn append(&self, record: NewPayrollRecord) -> ServiceResult<PayrollRecord> {
        let mut records = self.write()?;

        let (id, created_at) = match records.last() {
            Some(last) => (last.id + 1, Utc::now().max(last.created_at)),
            None => (1, Utc::now()),
        };

        let stored = record.into_record(id, created_at);
        records.push(stored.clone());

        debug!(
            record_id = stored.id,
            period_start = %stored.period_start,
            tax_categories = stored.taxes.len(),
            "Appended payroll record"
        );

        Ok(stored)
    }

    fn fetch_all_ordered_by_time(&self, order: SortOrder) -> ServiceResult<Vec<PayrollRecord>> {
        let records = self.read()?;
        let mut ordered = records.clone();
        if order == SortOrder::Descending {
            ordered.reverse();
        }
        Ok(ordered)
    }

    fn len(&self) -> ServiceResult<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaxMap;
    use serde_json::json;
    use std::sync::Arc;

    fn new_record(period: &str, net: f64) -> NewPayrollRecord {
        NewPayrollRecord {
            period_start: period.to_string(),
            period_end: period.to_string(),
            gross_pay: net * 1.3,
            net_pay: net,
            taxes: None,
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryRecordStore::new();
        assert_eq!(store.len().unwrap(), 0);
        assert!(store.is_empty().unwrap());
        assert!(
            store
                .fetch_all_ordered_by_time(SortOrder::Ascending)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let store = InMemoryRecordStore::new();
        let a = store.append(new_record("2025-04-01", 100.0)).unwrap();
        let b = store.append(new_record("2025-04-08", 200.0)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(b.created_at >= a.created_at);
    }

    #[test]
    fn test_fetch_orders() {
        let store = InMemoryRecordStore::new();
        for (i, period) in ["2025-04-01", "2025-04-08", "2025-04-15"].iter().enumerate() {
            store.append(new_record(period, 100.0 * (i + 1) as f64)).unwrap();
        }

        let ascending = store.fetch_all_ordered_by_time(SortOrder::Ascending).unwrap();
        let descending = store.fetch_all_ordered_by_time(SortOrder::Descending).unwrap();

        let asc_periods: Vec<&str> = ascending.iter().map(|r| r.period_start.as_str()).collect();
        let desc_periods: Vec<&str> = descending.iter().map(|r| r.period_start.as_str()).collect();

        assert_eq!(asc_periods, vec!["2025-04-01", "2025-04-08", "2025-04-15"]);
        assert_eq!(desc_periods, vec!["2025-04-15", "2025-04-08", "2025-04-01"]);
    }

    #[test]
    fn test_fetch_recent_limits_newest_first() {
        let store = InMemoryRecordStore::new();
        for i in 0..5 {
            store.append(new_record(&format!("p{}", i), 100.0)).unwrap();
        }

        let recent = store.fetch_recent(2).unwrap();
        let periods: Vec<&str> = recent.iter().map(|r| r.period_start.as_str()).collect();
        assert_eq!(periods, vec!["p4", "p3"]);

        assert_eq!(store.fetch_recent(50).unwrap().len(), 5);
        assert!(store.fetch_recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_append_normalizes_serialized_taxes() {
        let store = InMemoryRecordStore::new();
        let mut record = new_record("2025-04-01", 100.0);
        record.taxes = Some(TaxMap::Raw(r#"{"Fed": "10.5"}"#.to_string()));

        let stored = store.append(record).unwrap();
        assert_eq!(stored.taxes["Fed"], json!("10.5"));
    }

    #[test]
    fn test_concurrent_appends_keep_unique_ids() {
        let store = Arc::new(InMemoryRecordStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        store
                            .append(new_record(&format!("t{}-{}", t, i), 100.0))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let records = store.fetch_all_ordered_by_time(SortOrder::Ascending).unwrap();
        assert_eq!(records.len(), 200);
        for pair in records.windows(2) {
            assert_eq!(pair[1].id, pair[0].id + 1);
            assert!(pair[1].created_at >= pair[0].created_at);
        }
    }
}
