//! Game-state snapshots.
//!
//! ## GameSnapshot
//!
//! A point-in-time copy of everything the property checks look at:
//! - Turn counters (whose turn, actions, buys, cards played, coins)
//! - Each player's hand, deck and discard
//! - The shared supply
//!
//! Zones are `im::Vector`s whose length is the logical card count. The top
//! of a deck is its last element. Cloning a snapshot is O(1) and the copy is
//! fully independent: writes to either side are copy-on-write, so a "post"
//! snapshot handed to an engine never disturbs the "pre" baseline.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::SnapshotError;
use super::player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};

/// Most cards a hand may hold.
pub const MAX_HAND: usize = 500;

/// Most cards a deck (or discard pile) may hold.
pub const MAX_DECK: usize = 500;

/// Per-player card zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hand,
    Deck,
    Discard,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Hand, Zone::Deck, Zone::Discard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::Hand => "hand",
            Zone::Deck => "deck",
            Zone::Discard => "discard",
        }
    }

    /// Capacity bound for this zone.
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            Zone::Hand => MAX_HAND,
            Zone::Deck | Zone::Discard => MAX_DECK,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One player's hand, deck and discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerZones {
    pub hand: Vector<Card>,
    pub deck: Vector<Card>,
    pub discard: Vector<Card>,
}

impl PlayerZones {
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<Card> {
        match zone {
            Zone::Hand => &self.hand,
            Zone::Deck => &self.deck,
            Zone::Discard => &self.discard,
        }
    }

    pub fn zone_mut(&mut self, zone: Zone) -> &mut Vector<Card> {
        match zone {
            Zone::Hand => &mut self.hand,
            Zone::Deck => &mut self.deck,
            Zone::Discard => &mut self.discard,
        }
    }

    /// Cards in circulation for this player (hand + deck + discard).
    #[must_use]
    pub fn total(&self) -> usize {
        self.hand.len() + self.deck.len() + self.discard.len()
    }
}

/// Snapshot of a multiplayer game.
///
/// Equality compares logical contents only: counters, every zone's cards
/// and every supply entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Seat whose turn it is.
    pub whose_turn: PlayerId,

    /// Actions remaining this turn.
    pub num_actions: u32,

    /// Buys remaining this turn.
    pub num_buys: u32,

    /// Cards played so far this turn.
    pub played_card_count: u32,

    /// Coins available to the active player.
    pub coins: i32,

    /// Turn phase (0 = action).
    pub phase: u32,

    pub outpost_played: bool,

    /// Per-player zones.
    pub players: PlayerMap<PlayerZones>,

    /// Remaining copies per card pile. Cards not in the game have no entry.
    pub supply: FxHashMap<Card, i32>,
}

impl GameSnapshot {
    /// Create an empty snapshot: empty zones, empty supply, player 0 to act.
    ///
    /// Panics if `player_count` is 0; use [`GameSnapshot::validate`] to
    /// check the 2..=4 rule.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            whose_turn: PlayerId::new(0),
            num_actions: 0,
            num_buys: 0,
            played_card_count: 0,
            coins: 0,
            phase: 0,
            outpost_played: false,
            players: PlayerMap::with_default(player_count),
            supply: FxHashMap::default(),
        }
    }

    /// Seats in the game, read from the per-player zones.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over every seat in the game.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    /// A player's zone, or `None` for a seat outside the game.
    #[must_use]
    pub fn zone(&self, player: PlayerId, zone: Zone) -> Option<&Vector<Card>> {
        self.players.get(player).map(|p| p.zone(zone))
    }

    pub fn zone_mut(&mut self, player: PlayerId, zone: Zone) -> Option<&mut Vector<Card>> {
        self.players.get_mut(player).map(|p| p.zone_mut(zone))
    }

    /// Number of cards in a zone; 0 for a seat outside the game.
    #[must_use]
    pub fn zone_len(&self, player: PlayerId, zone: Zone) -> usize {
        self.zone(player, zone).map_or(0, Vector::len)
    }

    /// Card on top of a player's deck (the last element).
    #[must_use]
    pub fn top_of_deck(&self, player: PlayerId) -> Option<Card> {
        self.zone(player, Zone::Deck).and_then(|deck| deck.last().copied())
    }

    /// Cards in a player's circulation (hand + deck + discard).
    #[must_use]
    pub fn total_cards(&self, player: PlayerId) -> usize {
        self.players.get(player).map_or(0, PlayerZones::total)
    }

    /// Supply remaining for a card, or `None` if the card is not in the game.
    #[must_use]
    pub fn supply_of(&self, card: Card) -> Option<i32> {
        self.supply.get(&card).copied()
    }

    pub fn set_supply(&mut self, card: Card, count: i32) {
        self.supply.insert(card, count);
    }

    /// Clear a player's zone. No-op for a seat outside the game.
    pub fn empty_zone(&mut self, player: PlayerId, zone: Zone) {
        if let Some(cards) = self.zone_mut(player, zone) {
            cards.clear();
        }
    }

    /// Overwrite `dst` with a copy of this snapshot.
    pub fn rebase_onto(&self, dst: &mut GameSnapshot) {
        dst.clone_from(self);
    }

    /// Check the structural invariants.
    ///
    /// Supply counts are not checked here: a negative pile is a property
    /// failure for the checks to report, not a malformed snapshot.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let player_count = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(SnapshotError::PlayerCountOutOfRange(player_count));
        }
        if self.whose_turn.index() >= player_count {
            return Err(SnapshotError::TurnOutOfRange {
                whose_turn: self.whose_turn,
                player_count,
            });
        }
        for (player, zones) in self.players.iter() {
            for zone in Zone::ALL {
                let len = zones.zone(zone).len();
                if len > zone.capacity() {
                    return Err(SnapshotError::ZoneOverCapacity {
                        player,
                        zone,
                        len,
                        capacity: zone.capacity(),
                    });
                }
            }
        }
        Ok(())
    }
}
