//! Randomized trials of card effects.
//!
//! - `random`: random kingdoms and zone contents
//! - `battery`: the `PropertyBattery` trait and per-card batteries
//! - `driver`: `TrialDriver`, the two-phase run loop
//! - `accounting`: pass/fail/skip tallies

pub mod accounting;
pub mod adventurer;
pub mod battery;
pub mod driver;
pub mod random;
pub mod sea_hag;

pub use accounting::{TrialAccounting, TrialOutcome};
pub use adventurer::AdventurerBattery;
pub use battery::{battery_for, PropertyBattery};
pub use driver::TrialDriver;
pub use random::{random_card, random_kingdom, randomize_deck, randomize_discard, randomize_hand, randomize_players};
pub use sea_hag::SeaHagBattery;
