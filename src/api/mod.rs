//! HTTP API module for the Paycheck Digest service.
//!
//! This module provides the REST endpoints for uploading paystubs and
//! reading back history and analytics.

mod handlers;
mod response;
mod state;

pub use handlers::{HistoryQuery, create_router};
pub use response::{ApiError, ApiErrorResponse, HistoryEntry};
pub use state::AppState;
