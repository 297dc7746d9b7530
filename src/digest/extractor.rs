//! Extraction backend seam.
//!
//! Unpacking archives, reading PDFs and calling a text or vision model all
//! live behind [`Extractor`]. The service only sees bytes going in and a
//! [`DigestOutcome`] (or an error) coming out.

use async_trait::async_trait;

use crate::error::{ServiceError, ServiceResult};
use crate::models::DigestOutcome;

use super::Upload;

/// Turns one uploaded paystub document into structured payroll fields.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extracts payroll fields from an upload.
    async fn extract(&self, upload: &Upload) -> ServiceResult<DigestOutcome>;
}

/// Extractor used when no backend has been wired in. Every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredExtractor;

#[async_trait]
impl Extractor for UnconfiguredExtractor {
    async fn extract(&self, _upload: &Upload) -> ServiceResult<DigestOutcome> {
        Err(ServiceError::ExtractionFailed {
            message: "no extraction backend configured".to_string(),
        })
    }
}
