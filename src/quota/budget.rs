//! Monthly extraction budget.
//!
//! Each digest costs a fixed number of cents against a monthly cap. The
//! ledger is owned by the application state and handed to the digest
//! pipeline; it resets itself the first time it is charged in a new month.

use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Point-in-time view of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    /// Cents spent in the current month.
    pub spent_cents: u64,
    /// Calendar year of the current month.
    pub year: i32,
    /// Calendar month (1-12) the spend applies to.
    pub month: u32,
}

/// Tracks extraction spend against a monthly cap.
///
/// A cap of zero disables the budget entirely.
///
/// # Example
///
/// ```
/// use paycheck_digest::quota::BudgetLedger;
/// use chrono::NaiveDate;
///
/// let ledger = BudgetLedger::new(2, 1);
/// let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
///
/// assert!(ledger.try_charge(today));
/// assert!(ledger.try_charge(today));
/// assert!(!ledger.try_charge(today));
///
/// // A new month starts from zero.
/// let next_month = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// assert!(ledger.try_charge(next_month));
/// ```
#[derive(Debug)]
pub struct BudgetLedger {
    max_cost_cents: u64,
    cost_per_digest_cents: u64,
    state: Mutex<Option<BudgetSnapshot>>,
}

impl BudgetLedger {
    /// Creates a ledger with the given monthly cap and per-digest cost.
    pub fn new(max_cost_cents: u64, cost_per_digest_cents: u64) -> Self {
        Self {
            max_cost_cents,
            cost_per_digest_cents,
            state: Mutex::new(None),
        }
    }

    /// Creates a ledger that never refuses a charge.
    pub fn unlimited() -> Self {
        Self::new(0, 0)
    }

    /// Returns true if no cap is enforced.
    pub fn is_unlimited(&self) -> bool {
        self.max_cost_cents == 0
    }

    /// Charges one digest against the budget for the month containing
    /// `today`.
    ///
    /// Returns `false`, recording nothing, if the charge would exceed the cap.
    pub fn try_charge(&self, today: NaiveDate) -> bool {
        self.try_charge_cents(self.cost_per_digest_cents, today)
    }

    /// Charges an explicit number of cents.
    pub fn try_charge_cents(&self, cost_cents: u64, today: NaiveDate) -> bool {
        if self.is_unlimited() {
            return true;
        }

        // A poisoned lock still holds a consistent snapshot; keep going with it.
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let current = match *state {
            Some(s) if s.year == today.year() && s.month == today.month() => s,
            previous => {
                if let Some(p) = previous {
                    info!(
                        year = p.year,
                        month = p.month,
                        spent_cents = p.spent_cents,
                        "Resetting budget for new month"
                    );
                }
                BudgetSnapshot {
                    spent_cents: 0,
                    year: today.year(),
                    month: today.month(),
                }
            }
        };

        if current.spent_cents + cost_cents > self.max_cost_cents {
            warn!(
                spent_cents = current.spent_cents,
                max_cost_cents = self.max_cost_cents,
                "Monthly budget exhausted"
            );
            *state = Some(current);
            return false;
        }

        *state = Some(BudgetSnapshot {
            spent_cents: current.spent_cents + cost_cents,
            ..current
        });
        true
    }

    /// Returns the current month's spend, if anything has been charged yet.
    pub fn snapshot(&self) -> Option<BudgetSnapshot> {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
