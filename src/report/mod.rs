//! Assertion and reporting layer.
//!
//! - `property`: `NamedProperty`, `Comparison`, `Value`
//! - `reporter`: `Reporter`, which evaluates properties and writes
//!   `<subject> :: PASS|FAIL :: <rule>.` lines
//! - `dump`: snapshot dumps for failed trials

pub mod dump;
pub mod property;
pub mod reporter;

pub use dump::{write_cards, write_snapshot, write_trial_dump};
pub use property::{Comparison, NamedProperty, Value};
pub use reporter::Reporter;
