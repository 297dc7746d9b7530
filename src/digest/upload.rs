//! Upload classification.

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// The document container an upload arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    /// A single PDF document.
    Pdf,
    /// A ZIP archive expected to contain at least one PDF.
    Zip,
}

impl UploadKind {
    /// Classifies an upload by its filename extension, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use paycheck_digest::digest::UploadKind;
    ///
    /// assert_eq!(UploadKind::from_filename("April.PDF").unwrap(), UploadKind::Pdf);
    /// assert_eq!(UploadKind::from_filename("stubs.zip").unwrap(), UploadKind::Zip);
    /// assert!(UploadKind::from_filename("stub.png").is_err());
    /// ```
    pub fn from_filename(filename: &str) -> ServiceResult<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(UploadKind::Pdf)
        } else if lower.ends_with(".zip") {
            Ok(UploadKind::Zip)
        } else {
            Err(ServiceError::UnsupportedUpload {
                filename: filename.to_string(),
            })
        }
    }
}

/// A classified upload handed to an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Filename supplied by the client.
    pub filename: String,
    /// Container type.
    pub kind: UploadKind,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Classifies and wraps raw upload bytes.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> ServiceResult<Self> {
        let filename = filename.into();
        let kind = UploadKind::from_filename(&filename)?;
        Ok(Self {
            filename,
            kind,
            bytes,
        })
    }
}
