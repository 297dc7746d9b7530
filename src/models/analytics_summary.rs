//! Analytics output models.
//!
//! This module contains [`AnalyticsSummary`], the single value produced by the
//! analytics engine, and the [`Anomaly`] points it reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A net-pay point that deviates sharply from its trailing average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Period label of the flagged record.
    pub period_start: String,
    /// Net pay of the flagged record.
    pub net_pay: f64,
}

/// Summary statistics over a set of payroll records.
///
/// For an empty record set every numeric field is `0.0` and both collections
/// are empty.
///
/// # Example
///
/// ```
/// use paycheck_digest::models::AnalyticsSummary;
///
/// let empty = AnalyticsSummary::default();
/// assert_eq!(empty.total_net, 0.0);
/// assert!(empty.tax_totals.is_empty());
/// assert!(empty.anomalies.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Sum of gross pay over all records.
    pub total_gross: f64,
    /// Sum of net pay over all records.
    pub total_net: f64,
    /// Mean net pay.
    pub avg_net: f64,
    /// Smallest net pay.
    pub min_net: f64,
    /// Largest net pay.
    pub max_net: f64,
    /// Per-category tax sums, ordered by category label.
    pub tax_totals: BTreeMap<String, f64>,
    /// Least-squares slope of net pay against chronological record index.
    pub net_trend_slope: f64,
    /// Flagged points in chronological order.
    pub anomalies: Vec<Anomaly>,
}
