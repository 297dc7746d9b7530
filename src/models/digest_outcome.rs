//! Extraction result returned to uploaders.

use serde::{Deserialize, Serialize};

use super::NewPayrollRecord;

/// What an extractor pulled out of one paystub document.
///
/// The payroll fields are flattened alongside the narrative summaries, which
/// is also the JSON shape returned from `POST /digest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestOutcome {
    /// The payroll fields to persist.
    #[serde(flatten)]
    pub record: NewPayrollRecord,
    /// Plain-language explanation of the stub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_english: Option<String>,
    /// HTML summary card for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_summary: Option<String>,
}

impl DigestOutcome {
    /// Fills in `html_summary` from `plain_english` when the extractor only
    /// produced the plain-language version.
    ///
    /// # Example
    ///
    /// ```
    /// use paycheck_digest::models::{DigestOutcome, NewPayrollRecord};
    ///
    /// let mut outcome = DigestOutcome {
    ///     record: NewPayrollRecord {
    ///         period_start: "2025-04-01".to_string(),
    ///         period_end: "2025-04-14".to_string(),
    ///         gross_pay: 150.0,
    ///         net_pay: 100.0,
    ///         taxes: None,
    ///     },
    ///     plain_english: Some("You took home $100.".to_string()),
    ///     html_summary: None,
    /// };
    /// outcome.ensure_html_summary();
    /// assert_eq!(
    ///     outcome.html_summary.as_deref(),
    ///     Some("<div class='summary-card'><p>You took home $100.</p></div>")
    /// );
    /// ```
    pub fn ensure_html_summary(&mut self) {
        if self.html_summary.is_none() {
            if let Some(text) = &self.plain_english {
                self.html_summary = Some(format!(
                    "<div class='summary-card'><p>{}</p></div>",
                    text
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(plain: Option<&str>, html: Option<&str>) -> DigestOutcome {
        DigestOutcome {
            record: NewPayrollRecord {
                period_start: "2025-04-01".to_string(),
                period_end: "2025-04-14".to_string(),
                gross_pay: 150.0,
                net_pay: 100.0,
                taxes: None,
            },
            plain_english: plain.map(str::to_string),
            html_summary: html.map(str::to_string),
        }
    }

    #[test]
    fn test_existing_html_summary_is_kept() {
        let mut o = outcome(Some("plain"), Some("<p>custom</p>"));
        o.ensure_html_summary();
        assert_eq!(o.html_summary.as_deref(), Some("<p>custom</p>"));
    }

    #[test]
    fn test_no_summary_without_plain_english() {
        let mut o = outcome(None, None);
        o.ensure_html_summary();
        assert!(o.html_summary.is_none());
    }

    #[test]
    fn test_serializes_flat() {
        let value = serde_json::to_value(outcome(Some("plain"), None)).unwrap();
        assert_eq!(value["net_pay"], json!(100.0));
        assert_eq!(value["plain_english"], json!("plain"));
        assert!(value.get("html_summary").is_none());
        assert!(value.get("record").is_none());
    }

    #[test]
    fn test_deserializes_extractor_json() {
        let o: DigestOutcome = serde_json::from_value(json!({
            "period_start": "2025-04-01",
            "period_end": "2025-04-14",
            "gross_pay": 150.0,
            "net_pay": 100.0,
            "taxes": {"Fed": 10},
            "plain_english": "plain"
        }))
        .unwrap();
        assert_eq!(o.record.net_pay, 100.0);
        assert!(o.record.taxes.is_some());
    }
}
