//! Summary computation over the full record set.

use crate::models::{AnalyticsSummary, PayrollRecord};

use super::{aggregate_pay, aggregate_tax_totals, detect_anomalies, linear_trend_slope};

/// Returns the records in chronological order: oldest `created_at` first,
/// ties broken by `id`.
///
/// The sort is stable, so records sharing both keys keep their input order.
pub fn chronological(records: &[PayrollRecord]) -> Vec<&PayrollRecord> {
    let mut ordered: Vec<&PayrollRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    ordered
}

/// Computes summary statistics, trend and anomalies for a record set.
///
/// The input may arrive in any order; records are put in chronological order
/// before the trend and anomaly passes. The function is total: an empty
/// slice yields [`AnalyticsSummary::default`].
///
/// # Example
///
/// ```
/// use paycheck_digest::analytics::compute_summary;
/// use paycheck_digest::models::{PayrollRecord, TaxEntries};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap();
/// let records: Vec<PayrollRecord> = [(150.0, 100.0), (250.0, 200.0), (350.0, 300.0)]
///     .iter()
///     .enumerate()
///     .map(|(i, &(gross, net))| PayrollRecord {
///         id: i as u64 + 1,
///         period_start: format!("2025-04-{:02}", 1 + 7 * i),
///         period_end: format!("2025-04-{:02}", 7 + 7 * i),
///         gross_pay: gross,
///         net_pay: net,
///         taxes: TaxEntries::new(),
///         created_at: start + Duration::days(i as i64),
///     })
///     .collect();
///
/// let summary = compute_summary(&records);
/// assert_eq!(summary.total_gross, 750.0);
/// assert_eq!(summary.avg_net, 200.0);
/// assert!(summary.net_trend_slope > 0.0);
/// assert!(summary.anomalies.is_empty());
/// ```
pub fn compute_summary(records: &[PayrollRecord]) -> AnalyticsSummary {
    if records.is_empty() {
        return AnalyticsSummary::default();
    }

    let ordered = chronological(records);
    let gross: Vec<f64> = ordered.iter().map(|r| r.gross_pay).collect();
    let net: Vec<f64> = ordered.iter().map(|r| r.net_pay).collect();

    let pay = aggregate_pay(&gross, &net);

    AnalyticsSummary {
        total_gross: pay.total_gross,
        total_net: pay.total_net,
        avg_net: pay.avg_net,
        min_net: pay.min_net,
        max_net: pay.max_net,
        tax_totals: aggregate_tax_totals(ordered.iter().map(|r| &r.taxes)),
        net_trend_slope: linear_trend_slope(&net),
        anomalies: detect_anomalies(&ordered),
    }
}
