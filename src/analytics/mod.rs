//! Analytics over the stored payroll history.
//!
//! This module contains the pure functions behind `GET /analytics`: pay
//! aggregation, per-category tax totals, the least-squares net-pay trend and
//! trailing-window anomaly detection. [`compute_summary`] ties them together
//! and is the only entry point the API layer uses.
//!
//! Nothing in here performs I/O or holds state, so every function is safe to
//! call concurrently on independently fetched snapshots.

mod aggregation;
mod anomaly;
mod summary;
mod tax_totals;
mod trend;

pub use aggregation::{PayAggregates, aggregate_pay};
pub use anomaly::{ANOMALY_THRESHOLD, ANOMALY_WINDOW, detect_anomalies, relative_deviation};
pub use summary::{chronological, compute_summary};
pub use tax_totals::{aggregate_tax_totals, parse_amount};
pub use trend::linear_trend_slope;
