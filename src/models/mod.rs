//! Core data models for the Paycheck Digest service.
//!
//! This module contains all the domain models used throughout the service.

mod analytics_summary;
mod digest_outcome;
mod payroll_record;
mod tax_map;

pub use analytics_summary::{AnalyticsSummary, Anomaly};
pub use digest_outcome::DigestOutcome;
pub use payroll_record::{NewPayrollRecord, PayrollRecord};
pub use tax_map::{TaxEntries, TaxMap};
