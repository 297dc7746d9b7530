//! Error types for the Paycheck Digest service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the service surfaces. The analytics engine itself is
//! total and never produces one of these.

use thiserror::Error;

/// The main error type for the Paycheck Digest service.
///
/// # Example
///
/// ```
/// use paycheck_digest::error::ServiceError;
///
/// let error = ServiceError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The uploaded file is neither a PDF nor a ZIP archive.
    #[error("Only PDF or ZIP supported (got '{filename}')")]
    UnsupportedUpload {
        /// The filename supplied by the client.
        filename: String,
    },

    /// The upload request did not carry a file.
    #[error("No file was uploaded")]
    MissingUpload,

    /// The monthly extraction budget has been spent.
    #[error("Monthly LLM budget exhausted")]
    BudgetExhausted,

    /// Too many digest requests in the current window.
    #[error("Too many requests")]
    RateLimited,

    /// The extraction backend failed to produce a record.
    #[error("Extraction failed: {message}")]
    ExtractionFailed {
        /// A description of the extraction failure.
        message: String,
    },

    /// The record store could not be accessed.
    #[error("Record store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
