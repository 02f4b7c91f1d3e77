//! Per-card and per-category tallies: card kinds in zones, treasure, and
//! supply piles.

use tracing::{debug, trace};

use crate::core::{Card, GameSnapshot, PlayerId, Zone, KINGDOM_CARDS, VICTORY_CARDS};
use crate::engine::GameEngine;

/// Copies of `card` in a player's zone.
pub fn count_of_card_in_zone(state: &GameSnapshot, player: PlayerId, zone: Zone, card: Card) -> usize {
    let total = state
        .zone(player, zone)
        .map_or(0, |cards| cards.iter().filter(|&&c| c == card).count());
    trace!(%zone, %player, %card, total, "card count");
    total
}

/// Signed change in copies of `card` in a player's zone.
pub fn card_count_difference_in_zone(
    pre: &GameSnapshot,
    post: &GameSnapshot,
    player: PlayerId,
    zone: Zone,
    card: Card,
) -> i64 {
    count_of_card_in_zone(post, player, zone, card) as i64 - count_of_card_in_zone(pre, player, zone, card) as i64
}

/// Copies of `card` across a player's hand, deck and discard, as counted by
/// the engine.
pub fn count_of_card_in_full_deck<E: GameEngine + ?Sized>(
    engine: &E,
    state: &GameSnapshot,
    player: PlayerId,
    card: Card,
) -> usize {
    let total = engine.full_deck_count(player, card, state);
    trace!(%player, %card, total, "full deck count");
    total
}

pub fn card_count_difference_in_full_deck<E: GameEngine + ?Sized>(
    engine: &E,
    pre: &GameSnapshot,
    post: &GameSnapshot,
    player: PlayerId,
    card: Card,
) -> i64 {
    count_of_card_in_full_deck(engine, post, player, card) as i64
        - count_of_card_in_full_deck(engine, pre, player, card) as i64
}

/// True for copper, silver and gold.
pub fn is_treasure_card(card: Card) -> bool {
    card.is_treasure()
}

/// Treasure cards in a player's zone.
pub fn treasure_cards_in_zone(state: &GameSnapshot, player: PlayerId, zone: Zone) -> usize {
    let total = state
        .zone(player, zone)
        .map_or(0, |cards| cards.iter().filter(|c| is_treasure_card(**c)).count());
    trace!(%zone, %player, total, "treasure cards");
    total
}

pub fn treasure_difference_in_zone(pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId, zone: Zone) -> i64 {
    treasure_cards_in_zone(post, player, zone) as i64 - treasure_cards_in_zone(pre, player, zone) as i64
}

// Piles not in the game read as -1, the same value the engine reports.
fn supply_or_absent(state: &GameSnapshot, card: Card) -> i64 {
    state.supply_of(card).map_or(-1, i64::from)
}

/// Signed change in a card's supply pile.
pub fn supply_difference(pre: &GameSnapshot, post: &GameSnapshot, card: Card) -> i64 {
    let before = supply_or_absent(pre, card);
    let after = supply_or_absent(post, card);
    trace!(%card, pre = before, post = after, "supply count");
    after - before
}

pub fn supply_delta(pre: &GameSnapshot, post: &GameSnapshot, card: Card) -> usize {
    supply_difference(pre, post, card).unsigned_abs() as usize
}

pub fn supply_did_change(pre: &GameSnapshot, post: &GameSnapshot, card: Card) -> bool {
    supply_difference(pre, post, card) != 0
}

/// Sum of supply deltas over the victory piles.
pub fn victory_card_supply_delta(pre: &GameSnapshot, post: &GameSnapshot) -> usize {
    let delta = VICTORY_CARDS.iter().map(|&c| supply_delta(pre, post, c)).sum();
    debug!(delta, "victory supply");
    delta
}

/// Sum of supply deltas over the kingdom piles.
pub fn kingdom_card_supply_delta(pre: &GameSnapshot, post: &GameSnapshot) -> usize {
    let delta = KINGDOM_CARDS.iter().map(|&c| supply_delta(pre, post, c)).sum();
    debug!(delta, "kingdom supply");
    delta
}
