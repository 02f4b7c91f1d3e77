//! Run configuration.
//!
//! - `ReportConfig`: verbosity of the assertion layer
//! - `TrialConfig`: trial counts and seeding for the driver
//!
//! Both are plain runtime values so tests can vary verbosity and trial
//! counts without rebuilding.

use serde::{Deserialize, Serialize};

/// Trials per phase when none is given.
pub const DEFAULT_TRIALS: usize = 500;

/// Assertion-layer output settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Write a PASS line for every passing check.
    /// FAIL lines are always written.
    pub print_on_success: bool,

    /// Echo each rule (`* <rule>`) to the diagnostic stream before it is
    /// checked.
    pub debug_rules: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            print_on_success: true,
            debug_rules: false,
        }
    }
}

impl ReportConfig {
    #[must_use]
    pub fn with_print_on_success(mut self, enabled: bool) -> Self {
        self.print_on_success = enabled;
        self
    }

    #[must_use]
    pub fn with_debug_rules(mut self, enabled: bool) -> Self {
        self.debug_rules = enabled;
        self
    }
}

/// Trial driver settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Fresh-game trials (phase 1).
    pub fresh_trials: usize,

    /// Chained continuing-game trials (phase 2).
    pub chained_trials: usize,

    /// Driver seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    pub report: ReportConfig,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            fresh_trials: DEFAULT_TRIALS,
            chained_trials: DEFAULT_TRIALS,
            seed: None,
            report: ReportConfig::default(),
        }
    }
}

impl TrialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same trial count for both phases.
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.fresh_trials = trials;
        self.chained_trials = trials;
        self
    }

    #[must_use]
    pub fn with_fresh_trials(mut self, trials: usize) -> Self {
        self.fresh_trials = trials;
        self
    }

    #[must_use]
    pub fn with_chained_trials(mut self, trials: usize) -> Self {
        self.chained_trials = trials;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_report(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }
}
