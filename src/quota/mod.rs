//! Usage quotas for the digest endpoint.
//!
//! Both collaborators are plain values owned by the application state and
//! passed to whoever needs them; neither keeps process-wide state.

mod budget;
mod rate_limit;

pub use budget::{BudgetLedger, BudgetSnapshot};
pub use rate_limit::RateLimiter;
