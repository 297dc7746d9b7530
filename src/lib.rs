//! Paycheck Digest
//!
//! This crate ingests paystub uploads, keeps the extracted payroll records,
//! and derives summary analytics over them: totals, per-category tax sums,
//! a net-pay trend and anomaly flags.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod config;
pub mod digest;
pub mod error;
pub mod models;
pub mod quota;
pub mod store;
