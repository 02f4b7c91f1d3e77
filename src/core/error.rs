use thiserror::Error;

use super::card::Card;
use super::player::PlayerId;
use super::state::Zone;

/// Failures reported by a [`GameEngine`](crate::engine::GameEngine).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("player count {0} is outside 2..=4")]
    InvalidPlayerCount(usize),

    #[error("kingdom card {0} selected more than once")]
    DuplicateKingdomCard(Card),

    #[error("no effect implemented for {0}")]
    UnsupportedEffect(Card),

    #[error("player {0} is not seated in this game")]
    PlayerOutOfRange(PlayerId),

    #[error("player {player} {zone} is at capacity")]
    ZoneFull { player: PlayerId, zone: Zone },

    #[error("player {0} has no cards left to draw")]
    NothingToDraw(PlayerId),
}

/// Broken [`GameSnapshot`](crate::core::GameSnapshot) invariants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("player count {0} is outside 2..=4")]
    PlayerCountOutOfRange(usize),

    #[error("whose turn ({whose_turn}) is not a seat of a {player_count}-player game")]
    TurnOutOfRange {
        whose_turn: PlayerId,
        player_count: usize,
    },

    #[error("player {player} {zone} holds {len} cards, capacity is {capacity}")]
    ZoneOverCapacity {
        player: PlayerId,
        zone: Zone,
        len: usize,
        capacity: usize,
    },
}
