//! The digest flow: classify, charge, extract, persist.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::models::{DigestOutcome, PayrollRecord};
use crate::quota::BudgetLedger;
use crate::store::RecordStore;

use super::{Extractor, Upload};

/// Result of a successful digest.
#[derive(Debug, Clone, PartialEq)]
pub struct Digested {
    /// What the extractor returned, with `html_summary` filled in.
    pub outcome: DigestOutcome,
    /// The record as stored.
    pub record: PayrollRecord,
}

/// Runs uploaded documents through extraction and into the record store.
///
/// The pipeline charges the budget ledger before calling the extractor, so
/// a failed extraction still counts against the month's spend.
#[derive(Clone)]
pub struct DigestPipeline {
    extractor: Arc<dyn Extractor>,
    store: Arc<dyn RecordStore>,
    budget: Arc<BudgetLedger>,
}

impl DigestPipeline {
    /// Creates a pipeline from its collaborators.
    pub fn new(
        extractor: Arc<dyn Extractor>,
        store: Arc<dyn RecordStore>,
        budget: Arc<BudgetLedger>,
    ) -> Self {
        Self {
            extractor,
            store,
            budget,
        }
    }

    /// Returns the budget ledger this pipeline charges.
    pub fn budget(&self) -> &BudgetLedger {
        &self.budget
    }

    /// Digests an upload, charging the budget for today's date.
    pub async fn digest(&self, filename: &str, bytes: Vec<u8>) -> ServiceResult<Digested> {
        self.digest_on(filename, bytes, Utc::now().date_naive()).await
    }

    /// Digests an upload, charging the budget for the month containing
    /// `today`.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::UnsupportedUpload`] if the filename is not `.pdf`/`.zip`
    /// - [`ServiceError::BudgetExhausted`] if the monthly cap is reached
    /// - [`ServiceError::ExtractionFailed`] if the extractor fails
    /// - [`ServiceError::StoreUnavailable`] if the record cannot be stored
    pub async fn digest_on(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        today: NaiveDate,
    ) -> ServiceResult<Digested> {
        let upload = Upload::new(filename, bytes)?;

        if !self.budget.try_charge(today) {
            return Err(ServiceError::BudgetExhausted);
        }

        let mut outcome = match self.extractor.extract(&upload).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(filename = %upload.filename, error = %err, "Extraction failed");
                return Err(err);
            }
        };
        outcome.ensure_html_summary();

        let record = self.store.append(outcome.record.clone())?;
        info!(
            record_id = record.id,
            kind = ?upload.kind,
            size_bytes = upload.bytes.len(),
            "Digested paystub"
        );

        Ok(Digested { outcome, record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::UnconfiguredExtractor;
    use crate::models::{NewPayrollRecord, TaxMap};
    use crate::store::{InMemoryRecordStore, SortOrder};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedExtractor {
        calls: AtomicUsize,
    }

    impl FixedExtractor {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Extractor for FixedExtractor {
        async fn extract(&self, _upload: &Upload) -> ServiceResult<DigestOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(DigestOutcome {
                record: NewPayrollRecord {
                    period_start: "2025-04-01".to_string(),
                    period_end: "2025-04-14".to_string(),
                    gross_pay: 2500.0,
                    net_pay: 1900.0,
                    taxes: Some(TaxMap::Raw(r#"{"Fed": 400, "State": "200"}"#.to_string())),
                },
                plain_english: Some("You took home $1,900.".to_string()),
                html_summary: None,
            })
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
    }

    fn pipeline_with(
        extractor: Arc<dyn Extractor>,
        budget: BudgetLedger,
    ) -> (DigestPipeline, Arc<InMemoryRecordStore>) {
        let store = Arc::new(InMemoryRecordStore::new());
        let pipeline = DigestPipeline::new(extractor, store.clone(), Arc::new(budget));
        (pipeline, store)
    }

    #[tokio::test]
    async fn test_digest_persists_normalized_record() {
        let (pipeline, store) =
            pipeline_with(Arc::new(FixedExtractor::new()), BudgetLedger::unlimited());

        let digested = pipeline
            .digest_on("stub.pdf", b"%PDF-1.4".to_vec(), today())
            .await
            .unwrap();

        assert_eq!(digested.record.id, 1);
        assert_eq!(digested.record.taxes["Fed"], json!(400));
        assert_eq!(
            digested.outcome.html_summary.as_deref(),
            Some("<div class='summary-card'><p>You took home $1,900.</p></div>")
        );

        let stored = store.fetch_all_ordered_by_time(SortOrder::Ascending).unwrap();
        assert_eq!(stored, vec![digested.record]);
    }

    #[tokio::test]
    async fn test_unsupported_upload_is_rejected_before_charging() {
        let extractor = Arc::new(FixedExtractor::new());
        let (pipeline, store) = pipeline_with(extractor.clone(), BudgetLedger::new(1, 1));

        let result = pipeline.digest_on("stub.docx", vec![], today()).await;

        assert!(matches!(result, Err(ServiceError::UnsupportedUpload { .. })));
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
        assert!(pipeline.budget().snapshot().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_exhausted_budget_skips_extraction() {
        let extractor = Arc::new(FixedExtractor::new());
        let (pipeline, store) = pipeline_with(extractor.clone(), BudgetLedger::new(1, 1));

        pipeline.digest_on("a.pdf", vec![], today()).await.unwrap();
        let second = pipeline.digest_on("b.pdf", vec![], today()).await;

        assert!(matches!(second, Err(ServiceError::BudgetExhausted)));
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_extraction_failure_stores_nothing() {
        let (pipeline, store) =
            pipeline_with(Arc::new(UnconfiguredExtractor), BudgetLedger::new(10, 1));

        let result = pipeline.digest_on("stub.zip", vec![1, 2, 3], today()).await;

        assert!(matches!(result, Err(ServiceError::ExtractionFailed { .. })));
        assert!(store.is_empty().unwrap());
        assert_eq!(pipeline.budget().snapshot().unwrap().spent_cents, 1);
    }
}
