//! Pass/fail bookkeeping across trials.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one trial's battery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub passed: usize,
    pub failed: usize,
}

impl TrialOutcome {
    /// Checks that applied this trial.
    #[must_use]
    pub fn applicable(&self) -> usize {
        self.passed + self.failed
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Running totals for a whole run.
///
/// Skipped trials and setup failures are tallied separately and never
/// count toward `total_passed` / `total_failed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialAccounting {
    pub total_passed: usize,
    pub total_failed: usize,

    /// Trials whose battery was run.
    pub trials_run: usize,

    /// Trials skipped because a precondition did not hold.
    pub trials_skipped: usize,

    /// Trials abandoned because the engine could not set up a game.
    pub setup_failures: usize,
}

impl TrialAccounting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, outcome: TrialOutcome) {
        self.total_passed += outcome.passed;
        self.total_failed += outcome.failed;
        self.trials_run += 1;
    }

    pub fn skip(&mut self) {
        self.trials_skipped += 1;
    }

    pub fn setup_failed(&mut self) {
        self.setup_failures += 1;
    }

    /// Individual checks evaluated.
    #[must_use]
    pub fn total_checks(&self) -> usize {
        self.total_passed + self.total_failed
    }
}

impl fmt::Display for TrialAccounting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Individual Tests: {} | Passed: {} | Failed: {}",
            self.total_checks(),
            self.total_passed,
            self.total_failed
        )
    }
}
