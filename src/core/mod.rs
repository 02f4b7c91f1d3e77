//! Core types: cards, zones, players, snapshots, RNG, configuration, errors.
//!
//! Everything else in the crate reads or builds `GameSnapshot`s; nothing in
//! this module knows about deltas, reports or trials.

pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use card::{Card, UnknownCard, CARD_KINDS, KINGDOM_CARDS, VICTORY_CARDS};
pub use config::{ReportConfig, TrialConfig, DEFAULT_TRIALS};
pub use error::{EngineError, SnapshotError};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::GameRng;
pub use state::{GameSnapshot, PlayerZones, Zone, MAX_DECK, MAX_HAND};
