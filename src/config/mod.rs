//! Configuration loading and management for the Paycheck Digest service.
//!
//! This module provides functionality to load the service configuration from
//! YAML, covering the HTTP bind address, the extraction budget, the digest
//! rate limit and history defaults.
//!
//! # Example
//!
//! ```no_run
//! use paycheck_digest::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/paydigest").unwrap();
//! println!("Budget cap: {} cents", config.config().budget.max_cost_cents);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SERVICE_CONFIG_FILE};
pub use types::{BudgetConfig, HistoryConfig, RateLimitConfig, ServerConfig, ServiceConfig};
