//! Configuration types for the Paycheck Digest service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `service.yaml`. Every section and field has a
//! default, so a partial file is valid.

use std::time::Duration;

use serde::Deserialize;

use crate::quota::{BudgetLedger, RateLimiter};

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "127.0.0.1:8000").
    pub bind_address: String,
    /// Largest request body accepted by `POST /digest`, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

/// Monthly extraction budget settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Monthly spend cap in cents. Zero disables the cap.
    pub max_cost_cents: u64,
    /// Cost charged per digest, in cents.
    pub cost_per_digest_cents: u64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            max_cost_cents: 0,
            cost_per_digest_cents: 1,
        }
    }
}

impl BudgetConfig {
    /// Builds a fresh ledger from these settings.
    pub fn ledger(&self) -> BudgetLedger {
        BudgetLedger::new(self.max_cost_cents, self.cost_per_digest_cents)
    }
}

/// Digest rate-limit settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Requests admitted per window. Zero disables limiting.
    pub max_requests: u32,
    /// Window length in seconds.
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window_seconds: 60,
        }
    }
}

impl RateLimitConfig {
    /// Builds a fresh limiter from these settings.
    pub fn limiter(&self) -> RateLimiter {
        RateLimiter::new(self.max_requests, Duration::from_secs(self.window_seconds))
    }
}

/// History endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of records returned by `GET /history` when no limit is given.
    pub default_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { default_limit: 20 }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Extraction budget settings.
    pub budget: BudgetConfig,
    /// Digest rate-limit settings.
    pub rate_limit: RateLimitConfig,
    /// History endpoint settings.
    pub history: HistoryConfig,
}
