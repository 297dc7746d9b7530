//! Payroll record models.
//!
//! This module defines [`PayrollRecord`], one stored paystub, and
//! [`NewPayrollRecord`], the payload appended to the record store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TaxEntries, TaxMap};

/// A parsed paystub as held by the record store.
///
/// Records are immutable once stored. `created_at` defines the chronological
/// order used by the analytics engine; `id` breaks ties between records
/// stamped with the same instant.
///
/// # Example
///
/// ```
/// use paycheck_digest::models::{PayrollRecord, TaxEntries};
/// use chrono::Utc;
///
/// let record = PayrollRecord {
///     id: 1,
///     period_start: "2025-04-01".to_string(),
///     period_end: "2025-04-14".to_string(),
///     gross_pay: 2500.0,
///     net_pay: 1900.0,
///     taxes: TaxEntries::new(),
///     created_at: Utc::now(),
/// };
/// assert_eq!(record.net_pay, 1900.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Store-assigned sequence number, increasing in append order.
    pub id: u64,
    /// Label of the first day of the pay period. Opaque to the engine.
    pub period_start: String,
    /// Label of the last day of the pay period. Opaque to the engine.
    pub period_end: String,
    /// Gross pay for the period.
    pub gross_pay: f64,
    /// Net (take-home) pay for the period.
    pub net_pay: f64,
    /// Tax amounts by category.
    #[serde(default)]
    pub taxes: TaxEntries,
    /// When the record was appended to the store.
    pub created_at: DateTime<Utc>,
}

/// A paystub waiting to be appended to the record store.
///
/// `taxes` is still in whatever shape the extractor produced; the store
/// normalizes it on append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPayrollRecord {
    /// Label of the first day of the pay period.
    #[serde(default)]
    pub period_start: String,
    /// Label of the last day of the pay period.
    #[serde(default)]
    pub period_end: String,
    /// Gross pay for the period.
    #[serde(default)]
    pub gross_pay: f64,
    /// Net pay for the period.
    #[serde(default)]
    pub net_pay: f64,
    /// Tax amounts by category, if the extractor found any.
    #[serde(default)]
    pub taxes: Option<TaxMap>,
}

impl NewPayrollRecord {
    /// Stamps this payload with an id and insertion time, normalizing the
    /// tax breakdown into canonical form.
    pub fn into_record(self, id: u64, created_at: DateTime<Utc>) -> PayrollRecord {
        PayrollRecord {
            id,
            period_start: self.period_start,
            period_end: self.period_end,
            gross_pay: self.gross_pay,
            net_pay: self.net_pay,
            taxes: self.taxes.map(TaxMap::normalize).unwrap_or_default(),
            created_at,
        }
    }
}
