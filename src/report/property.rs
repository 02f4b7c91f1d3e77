//! Named property checks.
//!
//! A `NamedProperty` pairs an already-computed actual value with the value
//! it is expected to relate to. Evaluating it is pure; printing is the
//! reporter's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A checked quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
}

impl Value {
    fn as_int(self) -> i64 {
        match self {
            Value::Bool(b) => i64::from(b),
            Value::Int(n) => n,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}

/// How `actual` must relate to `expected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Equal,
    NotEqual,
    GreaterThan,
    AtLeast,
    LessThan,
    AtMost,
    /// `min <= actual <= max`; `expected` is ignored.
    InRange(i64, i64),
}

/// One named check: `<subject> :: <rule>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedProperty {
    pub subject: String,
    pub rule: String,
    pub expected: Value,
    pub actual: Value,
    pub comparison: Comparison,
}

impl NamedProperty {
    pub fn new(
        subject: impl Into<String>,
        rule: impl Into<String>,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        comparison: Comparison,
    ) -> Self {
        Self {
            subject: subject.into(),
            rule: rule.into(),
            expected: expected.into(),
            actual: actual.into(),
            comparison,
        }
    }

    pub fn equal(
        subject: impl Into<String>,
        rule: impl Into<String>,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
    ) -> Self {
        Self::new(subject, rule, expected, actual, Comparison::Equal)
    }

    pub fn not_equal(
        subject: impl Into<String>,
        rule: impl Into<String>,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
    ) -> Self {
        Self::new(subject, rule, expected, actual, Comparison::NotEqual)
    }

    pub fn greater_than(subject: impl Into<String>, rule: impl Into<String>, expected: i64, actual: i64) -> Self {
        Self::new(subject, rule, expected, actual, Comparison::GreaterThan)
    }

    pub fn at_least(subject: impl Into<String>, rule: impl Into<String>, expected: i64, actual: i64) -> Self {
        Self::new(subject, rule, expected, actual, Comparison::AtLeast)
    }

    pub fn less_than(subject: impl Into<String>, rule: impl Into<String>, expected: i64, actual: i64) -> Self {
        Self::new(subject, rule, expected, actual, Comparison::LessThan)
    }

    pub fn at_most(subject: impl Into<String>, rule: impl Into<String>, expected: i64, actual: i64) -> Self {
        Self::new(subject, rule, expected, actual, Comparison::AtMost)
    }

    pub fn in_range(subject: impl Into<String>, rule: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        Self::new(subject, rule, min, actual, Comparison::InRange(min, max))
    }

    /// Whether `actual` satisfies the comparison.
    ///
    /// Ordering comparisons read booleans as 0/1.
    #[must_use]
    pub fn evaluate(&self) -> bool {
        let (expected, actual) = (self.expected.as_int(), self.actual.as_int());
        match self.comparison {
            Comparison::Equal => self.expected == self.actual,
            Comparison::NotEqual => self.expected != self.actual,
            Comparison::GreaterThan => actual > expected,
            Comparison::AtLeast => actual >= expected,
            Comparison::LessThan => actual < expected,
            Comparison::AtMost => actual <= expected,
            Comparison::InRange(min, max) => min <= actual && actual <= max,
        }
    }

    /// Expected side as printed in a FAIL line: `5`, `!5`, `>=5`, `[1..3]`.
    #[must_use]
    pub fn render_expected(&self) -> String {
        let expected = self.expected;
        match self.comparison {
            Comparison::Equal => expected.to_string(),
            Comparison::NotEqual => format!("!{expected}"),
            Comparison::GreaterThan => format!(">{expected}"),
            Comparison::AtLeast => format!(">={expected}"),
            Comparison::LessThan => format!("<{expected}"),
            Comparison::AtMost => format!("<={expected}"),
            Comparison::InRange(min, max) => format!("[{min}..{max}]"),
        }
    }
}
