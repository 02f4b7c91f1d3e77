//! The boundary between the checks and the game engine under test.
//!
//! The property checks never implement card rules themselves. They reach
//! the engine only through `GameEngine`:
//! - `initialize_game` builds a fresh snapshot
//! - `card_effect` mutates a snapshot in place
//! - `supply_count` / `full_deck_count` / `whose_turn` are read-only queries

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, EngineError, GameSnapshot, PlayerId, Zone};

/// Number of kingdom piles in a game.
pub const KINGDOM_SIZE: usize = 10;

/// The ten cards chosen for a game's kingdom.
///
/// Order is significant only for [`KingdomSelection::require`], which
/// overwrites slots from the front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomSelection {
    cards: SmallVec<[Card; KINGDOM_SIZE]>,
}

impl KingdomSelection {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Select every card in `required`, overwriting slots from the front
    /// that hold none of them.
    ///
    /// Appends when every slot already holds a required card.
    pub fn require(&mut self, required: &[Card]) {
        for &card in required {
            if self.contains(card) {
                continue;
            }
            match self.cards.iter().position(|c| !required.contains(c)) {
                Some(slot) => self.cards[slot] = card,
                None => self.cards.push(card),
            }
        }
    }

    /// First card selected more than once.
    #[must_use]
    pub fn first_duplicate(&self) -> Option<Card> {
        self.cards
            .iter()
            .enumerate()
            .find(|&(i, card)| self.cards[i + 1..].contains(card))
            .map(|(_, card)| *card)
    }
}

/// A Dominion engine whose card effects are being checked.
///
/// Query methods have default implementations reading the snapshot;
/// engines override them when they keep their own bookkeeping.
pub trait GameEngine {
    /// Build a new game.
    fn initialize_game(
        &mut self,
        player_count: usize,
        kingdom: &KingdomSelection,
        seed: u64,
    ) -> Result<GameSnapshot, EngineError>;

    /// Resolve `card`'s effect for `player`, mutating `state` in place.
    fn card_effect(&mut self, card: Card, player: PlayerId, state: &mut GameSnapshot) -> Result<(), EngineError>;

    /// Copies left in a card's supply pile; -1 if the card is not in the game.
    fn supply_count(&self, card: Card, state: &GameSnapshot) -> i32 {
        state.supply_of(card).unwrap_or(-1)
    }

    /// Copies of `card` across a player's hand, deck and discard.
    fn full_deck_count(&self, player: PlayerId, card: Card, state: &GameSnapshot) -> usize {
        Zone::ALL
            .iter()
            .filter_map(|&zone| state.zone(player, zone))
            .map(|cards| cards.iter().filter(|&&c| c == card).count())
            .sum()
    }

    fn whose_turn(&self, state: &GameSnapshot) -> PlayerId {
        state.whose_turn
    }
}
