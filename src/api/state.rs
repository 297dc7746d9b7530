//! Application state for the Paycheck Digest API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::digest::{DigestPipeline, Extractor};
use crate::quota::RateLimiter;
use crate::store::RecordStore;

/// Shared application state.
///
/// Every collaborator is held behind an `Arc`, so cloning the state for each
/// request is cheap and all clones see the same store, ledger and limiter.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
    pipeline: DigestPipeline,
    rate_limiter: Arc<RateLimiter>,
    history_default_limit: usize,
    max_upload_bytes: usize,
}

impl AppState {
    /// Creates application state from configuration and its collaborators.
    ///
    /// The budget ledger and rate limiter are created fresh from `config`.
    pub fn new(
        config: &ServiceConfig,
        store: Arc<dyn RecordStore>,
        extractor: Arc<dyn Extractor>,
    ) -> Self {
        let budget = Arc::new(config.budget.ledger());
        let pipeline = DigestPipeline::new(extractor, Arc::clone(&store), budget);
        Self {
            store,
            pipeline,
            rate_limiter: Arc::new(config.rate_limit.limiter()),
            history_default_limit: config.history.default_limit,
            max_upload_bytes: config.server.max_upload_bytes,
        }
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Returns the digest pipeline.
    pub fn pipeline(&self) -> &DigestPipeline {
        &self.pipeline
    }

    /// Returns the digest rate limiter.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Returns the number of history entries served when no limit is given.
    pub fn history_default_limit(&self) -> usize {
        self.history_default_limit
    }

    /// Returns the request body limit for uploads, in bytes.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::UnconfiguredExtractor;
    use crate::models::NewPayrollRecord;
    use crate::store::InMemoryRecordStore;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new(
            &ServiceConfig::default(),
            Arc::new(InMemoryRecordStore::new()),
            Arc::new(UnconfiguredExtractor),
        );
        let clone = state.clone();

        state
            .store()
            .append(NewPayrollRecord {
                period_start: "2025-04-01".to_string(),
                period_end: "2025-04-14".to_string(),
                gross_pay: 150.0,
                net_pay: 100.0,
                taxes: None,
            })
            .unwrap();

        assert_eq!(clone.store().len().unwrap(), 1);
        assert_eq!(clone.history_default_limit(), 20);
    }
}
