//! HTTP request handlers for the Paycheck Digest API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Query, State, multipart::MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::compute_summary;
use crate::error::ServiceError;
use crate::store::SortOrder;

use super::response::{ApiError, ApiErrorResponse, HistoryEntry, panic_response};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// A panic anywhere in request handling is answered with a 500
/// `INTERNAL_ERROR` body instead of dropping the connection.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes();
    Router::new()
        .route("/health", get(health_handler))
        .route("/digest", post(digest_handler))
        .route("/history", get(history_handler))
        .route("/analytics", get(analytics_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// Query parameters for `GET /history`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Maximum number of entries to return.
    pub limit: Option<usize>,
}

fn error_response(correlation_id: Uuid, err: ServiceError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /digest.
///
/// Expects a multipart form with a `file` field holding a PDF or ZIP.
async fn digest_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    if !state.rate_limiter().check(Instant::now()) {
        return error_response(correlation_id, ServiceError::RateLimited);
    }

    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Rejected upload body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::malformed_upload(rejection.body_text())),
            )
                .into_response();
        }
    };

    let (filename, bytes) = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => break (filename, bytes.to_vec()),
                    Err(err) => {
                        warn!(correlation_id = %correlation_id, error = %err, "Failed reading upload");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ApiError::malformed_upload(err.body_text())),
                        )
                            .into_response();
                    }
                }
            }
            Ok(Some(_)) => continue,
            Ok(None) => return error_response(correlation_id, ServiceError::MissingUpload),
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Malformed multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiError::malformed_upload(err.body_text())),
                )
                    .into_response();
            }
        }
    };

    info!(
        correlation_id = %correlation_id,
        filename = %filename,
        size_bytes = bytes.len(),
        "Processing digest request"
    );

    let start_time = Instant::now();
    match state.pipeline().digest(&filename, bytes).await {
        Ok(digested) => {
            info!(
                correlation_id = %correlation_id,
                record_id = digested.record.id,
                duration_us = start_time.elapsed().as_micros(),
                "Digest completed successfully"
            );
            (StatusCode::OK, Json(digested.outcome)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /history.
///
/// Returns the most recent stubs, newest first.
async fn history_handler(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let limit = query.limit.unwrap_or(state.history_default_limit());

    match state.store().fetch_recent(limit) {
        Ok(records) => {
            let entries: Vec<HistoryEntry> = records.iter().map(HistoryEntry::from).collect();
            (StatusCode::OK, Json(entries)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /analytics.
///
/// Computes the summary over every stored stub, oldest first.
async fn analytics_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let records = match state.store().fetch_all_ordered_by_time(SortOrder::Ascending) {
        Ok(records) => records,
        Err(err) => return error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    let summary = compute_summary(&records);
    info!(
        correlation_id = %correlation_id,
        records = records.len(),
        anomalies = summary.anomalies.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Analytics computed"
    );

    (StatusCode::OK, Json(summary)).into_response()
}
