//! Tax mapping shapes.
//!
//! Extraction backends hand back the per-category tax breakdown either as a
//! JSON object or as a JSON object serialized into a string. [`TaxMap`]
//! captures both shapes so the record store can normalize them once into
//! [`TaxEntries`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Canonical tax breakdown: category label to raw amount value.
///
/// Amounts are kept as raw JSON values so that a single malformed entry can
/// be skipped by the analytics engine without discarding the whole record.
pub type TaxEntries = BTreeMap<String, serde_json::Value>;

/// The tax breakdown as it arrives from the extraction pipeline.
///
/// # Example
///
/// ```
/// use paycheck_digest::models::TaxMap;
///
/// let raw = TaxMap::Raw(r#"{"Fed": 12.5, "State": "4.10"}"#.to_string());
/// let entries = raw.normalize();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries["Fed"], serde_json::json!(12.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaxMap {
    /// An already-structured mapping.
    Parsed(TaxEntries),
    /// A JSON object serialized as text.
    Raw(String),
}

impl Default for TaxMap {
    fn default() -> Self {
        TaxMap::Parsed(TaxEntries::new())
    }
}

impl TaxMap {
    /// Converts this tax map into canonical [`TaxEntries`].
    ///
    /// Raw text that is blank or does not decode to a JSON object becomes an
    /// empty mapping.
    pub fn normalize(self) -> TaxEntries {
        match self {
            TaxMap::Parsed(entries) => entries,
            TaxMap::Raw(text) => {
                if text.trim().is_empty() {
                    return TaxEntries::new();
                }
                match serde_json::from_str::<TaxEntries>(&text) {
                    Ok(entries) => entries,
                    Err(err) => {
                        warn!(error = %err, "Discarding unreadable serialized tax mapping");
                        TaxEntries::new()
                    }
                }
            }
        }
    }
}

impl From<TaxEntries> for TaxMap {
    fn from(entries: TaxEntries) -> Self {
        TaxMap::Parsed(entries)
    }
}
