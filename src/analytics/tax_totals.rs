//! Per-category tax aggregation.
//!
//! Tax breakdowns come from extraction and are not trusted to be numeric.
//! [`parse_amount`] decides, per entry, whether a value counts; entries it
//! rejects are skipped without affecting the rest of the record.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::TaxEntries;

/// Interprets one tax amount, or returns `None` if the entry should be
/// skipped.
///
/// Accepted shapes:
/// - JSON numbers
/// - strings holding a decimal number (surrounding whitespace ignored)
/// - booleans, as `1.0` / `0.0`
///
/// Non-finite results are rejected so totals stay finite.
///
/// # Example
///
/// ```
/// use paycheck_digest::analytics::parse_amount;
/// use serde_json::json;
///
/// assert_eq!(parse_amount(&json!(12.5)), Some(12.5));
/// assert_eq!(parse_amount(&json!(" 4.10 ")), Some(4.10));
/// assert_eq!(parse_amount(&json!("n/a")), None);
/// assert_eq!(parse_amount(&json!(null)), None);
/// ```
pub fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    amount.is_finite().then_some(amount)
}

/// Sums tax amounts by category across every breakdown.
///
/// Categories missing from a breakdown contribute nothing for it. A category
/// appears in the output only if at least one of its entries parsed.
pub fn aggregate_tax_totals<'a, I>(breakdowns: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a TaxEntries>,
{
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    for taxes in breakdowns {
        for (category, value) in taxes {
            if let Some(amount) = parse_amount(value) {
                *totals.entry(category.clone()).or_insert(0.0) += amount;
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(value: Value) -> TaxEntries {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_integer_and_float() {
        assert_eq!(parse_amount(&json!(10)), Some(10.0));
        assert_eq!(parse_amount(&json!(-2.25)), Some(-2.25));
    }

    #[test]
    fn test_parse_numeric_string() {
        assert_eq!(parse_amount(&json!("30")), Some(30.0));
        assert_eq!(parse_amount(&json!("\t7.5\n")), Some(7.5));
    }

    #[test]
    fn test_parse_rejects_non_numeric_string() {
        assert_eq!(parse_amount(&json!("abc")), None);
        assert_eq!(parse_amount(&json!("")), None);
        assert_eq!(parse_amount(&json!("$12.00")), None);
    }

    #[test]
    fn test_parse_rejects_non_finite_strings() {
        assert_eq!(parse_amount(&json!("nan")), None);
        assert_eq!(parse_amount(&json!("inf")), None);
        assert_eq!(parse_amount(&json!("-infinity")), None);
    }

    #[test]
    fn test_parse_booleans() {
        assert_eq!(parse_amount(&json!(true)), Some(1.0));
        assert_eq!(parse_amount(&json!(false)), Some(0.0));
    }

    #[test]
    fn test_parse_rejects_containers_and_null() {
        assert_eq!(parse_amount(&json!(null)), None);
        assert_eq!(parse_amount(&json!([1, 2])), None);
        assert_eq!(parse_amount(&json!({"amount": 1})), None);
    }

    #[test]
    fn test_totals_sum_per_category() {
        let a = entries(json!({"Fed": 10, "State": 3}));
        let b = entries(json!({"Fed": 20}));
        let c = entries(json!({"Fed": 30, "Medicare": "1.5"}));

        let totals = aggregate_tax_totals([&a, &b, &c]);

        assert_eq!(totals.len(), 3);
        assert_eq!(totals["Fed"], 60.0);
        assert_eq!(totals["State"], 3.0);
        assert_eq!(totals["Medicare"], 1.5);
    }

    #[test]
    fn test_malformed_entry_skips_only_that_entry() {
        let a = entries(json!({"Fed": "oops", "State": 4}));
        let b = entries(json!({"Fed": 12}));

        let totals = aggregate_tax_totals([&a, &b]);

        assert_eq!(totals["Fed"], 12.0);
        assert_eq!(totals["State"], 4.0);
    }

    #[test]
    fn test_category_with_only_malformed_entries_is_absent() {
        let a = entries(json!({"Fed": "oops", "State": 4}));
        let totals = aggregate_tax_totals([&a]);
        assert!(!totals.contains_key("Fed"));
    }

    #[test]
    fn test_empty_breakdowns() {
        let empty = TaxEntries::new();
        assert!(aggregate_tax_totals([&empty, &empty]).is_empty());
        assert!(aggregate_tax_totals(std::iter::empty::<&TaxEntries>()).is_empty());
    }
}
