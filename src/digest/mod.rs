//! Paystub ingestion.
//!
//! Uploads are classified by filename, charged against the monthly budget,
//! handed to an [`Extractor`] and the resulting record appended to the
//! record store.

mod extractor;
mod pipeline;
mod upload;

pub use extractor::{Extractor, UnconfiguredExtractor};
pub use pipeline::{DigestPipeline, Digested};
pub use upload::{Upload, UploadKind};
