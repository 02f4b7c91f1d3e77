//! Card identifiers and the fixed card-kind table.
//!
//! Dominion's base set used here has 27 card kinds: curse, three victory
//! cards, three treasures, and 20 kingdom cards. Discriminants match the
//! engine's integer encoding so dumps and seeds line up with it.
//!
//! ## Categories
//!
//! - Treasure: copper, silver, gold
//! - Victory (supply accounting): estate, duchy, province, gardens, great hall
//! - Kingdom: everything from adventurer through treasure map
//!
//! Gardens and great hall belong to both the victory and kingdom sets.
//! Curse belongs to neither.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the 27 fixed card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Card {
    Curse = 0,
    Estate = 1,
    Duchy = 2,
    Province = 3,
    Copper = 4,
    Silver = 5,
    Gold = 6,
    Adventurer = 7,
    CouncilRoom = 8,
    Feast = 9,
    Gardens = 10,
    Mine = 11,
    Remodel = 12,
    Smithy = 13,
    Village = 14,
    Baron = 15,
    GreatHall = 16,
    Minion = 17,
    Steward = 18,
    Tribute = 19,
    Ambassador = 20,
    Cutpurse = 21,
    Embargo = 22,
    Outpost = 23,
    Salvager = 24,
    SeaHag = 25,
    TreasureMap = 26,
}

/// Number of card kinds.
pub const CARD_KINDS: usize = 27;

/// Cards whose supply piles count as victory piles.
pub const VICTORY_CARDS: [Card; 5] = [
    Card::Estate,
    Card::Duchy,
    Card::Province,
    Card::Gardens,
    Card::GreatHall,
];

/// Cards whose supply piles count as kingdom piles.
pub const KINGDOM_CARDS: [Card; 20] = [
    Card::Adventurer,
    Card::CouncilRoom,
    Card::Feast,
    Card::Gardens,
    Card::Mine,
    Card::Remodel,
    Card::Smithy,
    Card::Village,
    Card::Baron,
    Card::GreatHall,
    Card::Minion,
    Card::Steward,
    Card::Tribute,
    Card::Ambassador,
    Card::Cutpurse,
    Card::Embargo,
    Card::Outpost,
    Card::Salvager,
    Card::SeaHag,
    Card::TreasureMap,
];

impl Card {
    /// Every card kind, in discriminant order.
    pub const ALL: [Card; CARD_KINDS] = [
        Card::Curse,
        Card::Estate,
        Card::Duchy,
        Card::Province,
        Card::Copper,
        Card::Silver,
        Card::Gold,
        Card::Adventurer,
        Card::CouncilRoom,
        Card::Feast,
        Card::Gardens,
        Card::Mine,
        Card::Remodel,
        Card::Smithy,
        Card::Village,
        Card::Baron,
        Card::GreatHall,
        Card::Minion,
        Card::Steward,
        Card::Tribute,
        Card::Ambassador,
        Card::Cutpurse,
        Card::Embargo,
        Card::Outpost,
        Card::Salvager,
        Card::SeaHag,
        Card::TreasureMap,
    ];

    /// Look a card up by its integer encoding.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Card> {
        Self::ALL.get(index).copied()
    }

    /// Integer encoding of this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case card name, as printed in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Curse => "curse",
            Card::Estate => "estate",
            Card::Duchy => "duchy",
            Card::Province => "province",
            Card::Copper => "copper",
            Card::Silver => "silver",
            Card::Gold => "gold",
            Card::Adventurer => "adventurer",
            Card::CouncilRoom => "council_room",
            Card::Feast => "feast",
            Card::Gardens => "gardens",
            Card::Mine => "mine",
            Card::Remodel => "remodel",
            Card::Smithy => "smithy",
            Card::Village => "village",
            Card::Baron => "baron",
            Card::GreatHall => "great_hall",
            Card::Minion => "minion",
            Card::Steward => "steward",
            Card::Tribute => "tribute",
            Card::Ambassador => "ambassador",
            Card::Cutpurse => "cutpurse",
            Card::Embargo => "embargo",
            Card::Outpost => "outpost",
            Card::Salvager => "salvager",
            Card::SeaHag => "sea_hag",
            Card::TreasureMap => "treasure_map",
        }
    }

    /// Coin value when played as a treasure.
    #[must_use]
    pub const fn coin_value(self) -> i32 {
        match self {
            Card::Copper => 1,
            Card::Silver => 2,
            Card::Gold => 3,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn is_treasure(self) -> bool {
        matches!(self, Card::Copper | Card::Silver | Card::Gold)
    }

    #[must_use]
    pub fn is_victory(self) -> bool {
        VICTORY_CARDS.contains(&self)
    }

    #[must_use]
    pub fn is_kingdom(self) -> bool {
        KINGDOM_CARDS.contains(&self)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown card name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown card name: {0}")]
pub struct UnknownCard(pub String);

impl FromStr for Card {
    type Err = UnknownCard;

    /// Accepts the report name (`sea_hag`) as well as kebab-case (`sea-hag`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|card| card.name() == normalized)
            .ok_or_else(|| UnknownCard(s.to_string()))
    }
}
