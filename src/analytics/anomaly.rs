//! Net-pay anomaly detection.
//!
//! Each record is compared against the mean of the records immediately
//! before it. The window trails the current point, never includes it, and is
//! recomputed from scratch at every index.

use crate::models::{Anomaly, PayrollRecord};

/// Number of preceding records averaged for each comparison.
pub const ANOMALY_WINDOW: usize = 3;

/// Relative deviation from the trailing mean above which a point is flagged.
pub const ANOMALY_THRESHOLD: f64 = 0.10;

/// Returns the relative deviation of `value` from `window_mean`, or `None`
/// when the mean is zero.
///
/// The deviation is divided by the signed mean, so a negative mean never
/// yields a deviation above a positive threshold.
pub fn relative_deviation(value: f64, window_mean: f64) -> Option<f64> {
    if window_mean == 0.0 {
        return None;
    }
    Some((value - window_mean).abs() / window_mean)
}

/// Flags records whose net pay deviates from the trailing
/// [`ANOMALY_WINDOW`]-record mean by more than [`ANOMALY_THRESHOLD`].
///
/// `records` must already be in chronological order. The first
/// `ANOMALY_WINDOW` records lack history and are never flagged.
///
/// # Example
///
/// ```
/// use paycheck_digest::analytics::detect_anomalies;
/// use paycheck_digest::models::{PayrollRecord, TaxEntries};
/// use chrono::Utc;
///
/// let records: Vec<PayrollRecord> = [100.0, 100.0, 100.0, 200.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &net)| PayrollRecord {
///         id: i as u64,
///         period_start: format!("2025-0{}-01", i + 1),
///         period_end: format!("2025-0{}-28", i + 1),
///         gross_pay: net,
///         net_pay: net,
///         taxes: TaxEntries::new(),
///         created_at: Utc::now(),
///     })
///     .collect();
/// let refs: Vec<&PayrollRecord> = records.iter().collect();
///
/// let anomalies = detect_anomalies(&refs);
/// assert_eq!(anomalies.len(), 1);
/// assert_eq!(anomalies[0].period_start, "2025-04-01");
/// assert_eq!(anomalies[0].net_pay, 200.0);
/// ```
pub fn detect_anomalies(records: &[&PayrollRecord]) -> Vec<Anomaly> {
    records
        .windows(ANOMALY_WINDOW + 1)
        .filter_map(|window| {
            let (current, history) = window.split_last()?;
            let window_mean =
                history.iter().map(|r| r.net_pay).sum::<f64>() / ANOMALY_WINDOW as f64;
            let deviation = relative_deviation(current.net_pay, window_mean)?;
            (deviation > ANOMALY_THRESHOLD).then(|| Anomaly {
                period_start: current.period_start.clone(),
                net_pay: current.net_pay,
            })
        })
        .collect()
}
