//! Positional lookups within a zone.

use tracing::trace;

use crate::core::{Card, GameSnapshot, PlayerId, Zone};

/// Index of the `n`-th occurrence of `card` in a player's zone.
///
/// - `n > 0`: count matches forward from index 0 (1-based).
/// - `n < 0`: count `|n|` matches backward from the last card.
/// - `n == 0`, fewer than `|n|` matches, or an unknown seat: `None`.
pub fn nth_occurrence(state: &GameSnapshot, player: PlayerId, zone: Zone, card: Card, n: i32) -> Option<usize> {
    let cards = state.zone(player, zone)?;
    if n == 0 {
        return None;
    }
    let skip = n.unsigned_abs() as usize - 1;

    let found = if n > 0 {
        (0..cards.len()).filter(|&i| cards[i] == card).nth(skip)
    } else {
        (0..cards.len()).rev().filter(|&i| cards[i] == card).nth(skip)
    };
    trace!(%zone, %player, %card, n, index = ?found, "card position");
    found
}

pub fn first_occurrence(state: &GameSnapshot, player: PlayerId, zone: Zone, card: Card) -> Option<usize> {
    nth_occurrence(state, player, zone, card, 1)
}

pub fn last_occurrence(state: &GameSnapshot, player: PlayerId, zone: Zone, card: Card) -> Option<usize> {
    nth_occurrence(state, player, zone, card, -1)
}

/// Card on top of a player's deck.
pub fn top_of_deck(state: &GameSnapshot, player: PlayerId) -> Option<Card> {
    let top = state.top_of_deck(player);
    trace!(%player, card = ?top, "top of deck");
    top
}

pub fn top_of_deck_is(state: &GameSnapshot, player: PlayerId, card: Card) -> bool {
    top_of_deck(state, player) == Some(card)
}

/// True if every player except `excluded` has `card` on top of their deck.
pub fn all_others_top_of_deck_is(state: &GameSnapshot, excluded: PlayerId, card: Card) -> bool {
    excluded
        .others(state.player_count())
        .all(|p| top_of_deck_is(state, p, card))
}
