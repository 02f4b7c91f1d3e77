//! Assertion layer: evaluates named properties and writes PASS/FAIL lines.

use std::io::{self, Stderr, Stdout, Write};

use tracing::warn;

use super::property::NamedProperty;
use crate::core::ReportConfig;

/// Writes check results to `out` and diagnostics to `diag`.
///
/// Never panics on I/O: a failed write is logged and the check result is
/// returned unchanged.
pub struct Reporter<O: Write, D: Write> {
    config: ReportConfig,
    out: O,
    diag: D,
}

impl Reporter<Stdout, Stderr> {
    /// Results to stdout, diagnostics to stderr.
    pub fn stdio(config: ReportConfig) -> Self {
        Self::new(config, io::stdout(), io::stderr())
    }
}

impl<O: Write, D: Write> Reporter<O, D> {
    pub fn new(config: ReportConfig, out: O, diag: D) -> Self {
        Self { config, out, diag }
    }

    #[must_use]
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Result stream.
    pub fn out(&self) -> &O {
        &self.out
    }

    /// Diagnostic stream.
    pub fn diag(&self) -> &D {
        &self.diag
    }

    pub fn diag_mut(&mut self) -> &mut D {
        &mut self.diag
    }

    pub fn into_parts(self) -> (O, D) {
        (self.out, self.diag)
    }

    /// Evaluate `property` and report it.
    pub fn record(&mut self, property: &NamedProperty) -> bool {
        if self.config.debug_rules {
            let rule = &property.rule;
            if let Err(err) = writeln!(self.diag, "* {rule}") {
                warn!(%err, "failed to echo rule");
            }
        }

        let passed = property.evaluate();
        let written = if passed {
            if self.config.print_on_success {
                writeln!(self.out, "{} :: PASS :: {}.", property.subject, property.rule)
            } else {
                Ok(())
            }
        } else {
            writeln!(
                self.out,
                "{} :: FAIL :: {}. (EXPECTED: {}, ACTUAL: {})",
                property.subject,
                property.rule,
                property.render_expected(),
                property.actual
            )
        };
        if let Err(err) = written {
            warn!(%err, subject = %property.subject, "failed to write check result");
        }
        passed
    }

    /// Write a line to the result stream.
    pub fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            warn!(%err, "failed to write report line");
        }
    }

    pub fn flush(&mut self) {
        if let Err(err) = self.out.flush().and_then(|()| self.diag.flush()) {
            warn!(%err, "failed to flush report streams");
        }
    }

    pub fn assert_equal_bool(&mut self, subject: &str, rule: &str, expected: bool, actual: bool) -> bool {
        self.record(&NamedProperty::equal(subject, rule, expected, actual))
    }

    pub fn assert_not_equal_bool(&mut self, subject: &str, rule: &str, expected: bool, actual: bool) -> bool {
        self.record(&NamedProperty::not_equal(subject, rule, expected, actual))
    }

    pub fn assert_equal_int(&mut self, subject: &str, rule: &str, expected: i64, actual: i64) -> bool {
        self.record(&NamedProperty::equal(subject, rule, expected, actual))
    }

    pub fn assert_not_equal_int(&mut self, subject: &str, rule: &str, expected: i64, actual: i64) -> bool {
        self.record(&NamedProperty::not_equal(subject, rule, expected, actual))
    }

    pub fn assert_greater_than(&mut self, subject: &str, rule: &str, expected: i64, actual: i64) -> bool {
        self.record(&NamedProperty::greater_than(subject, rule, expected, actual))
    }

    pub fn assert_at_least(&mut self, subject: &str, rule: &str, expected: i64, actual: i64) -> bool {
        self.record(&NamedProperty::at_least(subject, rule, expected, actual))
    }

    pub fn assert_less_than(&mut self, subject: &str, rule: &str, expected: i64, actual: i64) -> bool {
        self.record(&NamedProperty::less_than(subject, rule, expected, actual))
    }

    pub fn assert_at_most(&mut self, subject: &str, rule: &str, expected: i64, actual: i64) -> bool {
        self.record(&NamedProperty::at_most(subject, rule, expected, actual))
    }

    pub fn assert_in_range(&mut self, subject: &str, rule: &str, min: i64, max: i64, actual: i64) -> bool {
        self.record(&NamedProperty::in_range(subject, rule, min, max, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter(config: ReportConfig) -> Reporter<Vec<u8>, Vec<u8>> {
        Reporter::new(config, Vec::new(), Vec::new())
    }

    fn text(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_pass_line_only_when_enabled() {
        let mut loud = reporter(ReportConfig::default());
        assert!(loud.assert_equal_int("f", "rule", 5, 5));
        assert_eq!(text(loud.out()), "f :: PASS :: rule.\n");

        let mut quiet = reporter(ReportConfig::default().with_print_on_success(false));
        assert!(quiet.assert_equal_int("f", "rule", 5, 5));
        assert!(quiet.out().is_empty());
    }

    #[test]
    fn test_fail_line_always_written() {
        let mut quiet = reporter(ReportConfig::default().with_print_on_success(false));
        assert!(!quiet.assert_equal_int("f", "rule", 5, 6));
        assert_eq!(text(quiet.out()), "f :: FAIL :: rule. (EXPECTED: 5, ACTUAL: 6)\n");
    }

    #[test]
    fn test_fail_line_renders_comparison() {
        let mut r = reporter(ReportConfig::default());
        assert!(!r.assert_at_most("adventurerEffect", "deck shrinks", -2, 0));
        assert!(!r.assert_not_equal_bool("f", "flag", true, true));
        assert!(!r.assert_in_range("f", "range", 1, 3, 7));
        let out = text(r.out());
        assert!(out.contains("(EXPECTED: <=-2, ACTUAL: 0)"));
        assert!(out.contains("(EXPECTED: !true, ACTUAL: true)"));
        assert!(out.contains("(EXPECTED: [1..3], ACTUAL: 7)"));
    }

    #[test]
    fn test_debug_rules_echo() {
        let mut r = reporter(ReportConfig::default().with_debug_rules(true));
        r.assert_greater_than("f", "grows", 0, 1);
        assert_eq!(text(r.diag()), "* grows\n");

        let mut silent = reporter(ReportConfig::default());
        silent.assert_at_least("f", "grows", 0, 1);
        assert!(silent.diag().is_empty());
    }

    #[test]
    fn test_remaining_wrappers() {
        let mut r = reporter(ReportConfig::default().with_print_on_success(false));
        assert!(r.assert_equal_bool("f", "r", false, false));
        assert!(r.assert_not_equal_int("f", "r", 1, 2));
        assert!(r.assert_less_than("f", "r", 1, 0));
        assert!(r.out().is_empty());
    }
}
