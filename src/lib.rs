//! # dominion-check
//!
//! Randomized property checking for Dominion card effects.
//!
//! ## Design Principles
//!
//! 1. **Engine at arm's length**: card rules live behind the `GameEngine`
//!    trait. The checks only read snapshots taken before and after an
//!    effect.
//!
//! 2. **N-Player First**: every delta function takes the seat it is asked
//!    about, and seats outside the game read as empty rather than panicking.
//!
//! 3. **Reproducible runs**: all randomness flows from one seeded
//!    `GameRng`.
//!
//! ## Architecture
//!
//! - **Persistent zones**: `im::Vector` zones make a post-state copy O(1)
//!   and never alias the pre-state.
//!
//! - **Named properties**: each check is a `NamedProperty` value, evaluated
//!   and printed by a `Reporter`.
//!
//! ## Modules
//!
//! - `core`: cards, players, snapshots, RNG, configuration, errors
//! - `delta`: pure pre/post comparison functions
//! - `engine`: `GameEngine` trait and the reference engine
//! - `report`: named properties, PASS/FAIL reporting, state dumps
//! - `trial`: randomizers, property batteries, the trial driver

pub mod core;
pub mod delta;
pub mod engine;
pub mod report;
pub mod trial;

// Re-export commonly used types
pub use crate::core::{
    Card, EngineError, GameRng, GameSnapshot, PlayerId, PlayerMap, PlayerZones, ReportConfig, SnapshotError,
    TrialConfig, Zone,
};

pub use crate::engine::{GameEngine, KingdomSelection, ReferenceEngine};

pub use crate::report::{Comparison, NamedProperty, Reporter, Value};

pub use crate::trial::{battery_for, PropertyBattery, TrialAccounting, TrialDriver, TrialOutcome};
