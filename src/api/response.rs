//! Response types for the Paycheck Digest API.
//!
//! This module defines the error response structures, the history entry
//! shape, and the mapping from [`ServiceError`] to HTTP status codes.

use std::any::Any;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ServiceError;
use crate::models::PayrollRecord;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed upload error response.
    pub fn malformed_upload(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_UPLOAD", message)
    }

    /// Creates an internal error response for an unexpected fault.
    pub fn internal(details: impl Into<String>) -> Self {
        Self::with_details("INTERNAL_ERROR", "Internal server error", details)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        // Rate-limited clients get a bare text body, not the JSON envelope.
        if self.status == StatusCode::TOO_MANY_REQUESTS {
            return (
                self.status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.error.message,
            )
                .into_response();
        }
        (self.status, Json(self.error)).into_response()
    }
}

/// Converts a panic raised while serving a request into a 500 response.
///
/// Installed on the router through `CatchPanicLayer::custom`. The panic
/// message, when it is a string, is returned in `details`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(details = %details, "Request handler panicked");

    ApiErrorResponse {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        error: ApiError::internal(details),
    }
    .into_response()
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            ServiceError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            ServiceError::UnsupportedUpload { filename } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNSUPPORTED_UPLOAD",
                    "Only PDF or ZIP supported",
                    format!("'{}' is not a .pdf or .zip file", filename),
                ),
            },
            ServiceError::MissingUpload => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_UPLOAD", "Expected a multipart field named 'file'"),
            },
            ServiceError::BudgetExhausted => ApiErrorResponse {
                status: StatusCode::PAYMENT_REQUIRED,
                error: ApiError::new("BUDGET_EXHAUSTED", "Monthly LLM budget exhausted"),
            },
            ServiceError::RateLimited => ApiErrorResponse {
                status: StatusCode::TOO_MANY_REQUESTS,
                error: ApiError::new("RATE_LIMITED", "Too many requests"),
            },
            ServiceError::ExtractionFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXTRACTION_FAILED", "Extraction failed", message),
            },
            ServiceError::StoreUnavailable { message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "STORE_UNAVAILABLE",
                    "Record store unavailable",
                    message,
                ),
            },
        }
    }
}

/// One row of `GET /history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Period label of the stub.
    pub period_start: String,
    /// Net pay of the stub.
    pub net_pay: f64,
}

impl From<&PayrollRecord> for HistoryEntry {
    fn from(record: &PayrollRecord) -> Self {
        Self {
            period_start: record.period_start.clone(),
            net_pay: record.net_pay,
        }
    }
}
