//! Pay aggregation.
//!
//! Reductions over gross and net pay: totals, mean, minimum and maximum.

use serde::{Deserialize, Serialize};

/// Totals and net-pay extremes over a record set.
///
/// All fields are `0.0` when no records were aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PayAggregates {
    /// Sum of gross pay.
    pub total_gross: f64,
    /// Sum of net pay.
    pub total_net: f64,
    /// Mean net pay (`total_net / n`).
    pub avg_net: f64,
    /// Smallest net pay.
    pub min_net: f64,
    /// Largest net pay.
    pub max_net: f64,
}

/// Aggregates paired gross and net amounts.
///
/// `gross` and `net` are summed independently; the mean and extremes are
/// taken over `net` only.
///
/// # Example
///
/// ```
/// use paycheck_digest::analytics::aggregate_pay;
///
/// let agg = aggregate_pay(&[150.0, 250.0, 350.0], &[100.0, 200.0, 300.0]);
/// assert_eq!(agg.total_gross, 750.0);
/// assert_eq!(agg.total_net, 600.0);
/// assert_eq!(agg.avg_net, 200.0);
/// assert_eq!(agg.min_net, 100.0);
/// assert_eq!(agg.max_net, 300.0);
/// ```
pub fn aggregate_pay(gross: &[f64], net: &[f64]) -> PayAggregates {
    let total_gross: f64 = gross.iter().sum();

    let Some((&first, rest)) = net.split_first() else {
        return PayAggregates {
            total_gross,
            ..PayAggregates::default()
        };
    };

    let total_net: f64 = net.iter().sum();
    let (min_net, max_net) = rest
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    PayAggregates {
        total_gross,
        total_net,
        avg_net: total_net / net.len() as f64,
        min_net,
        max_net,
    }
}
