//! Random game configurations and zone contents.
//!
//! Zone lengths are bounded so that no zone exceeds its capacity; zone
//! contents are drawn uniformly over all card kinds, whether or not the
//! card is in the game.

use tracing::trace;

use crate::core::{Card, GameRng, GameSnapshot, PlayerId, Zone, KINGDOM_CARDS, MAX_DECK, MAX_HAND};
use crate::engine::{KingdomSelection, KINGDOM_SIZE};

/// Uniformly random card kind.
pub fn random_card(rng: &mut GameRng) -> Card {
    rng.choose(&Card::ALL).copied().unwrap_or(Card::Curse)
}

/// Ten distinct kingdom cards.
pub fn random_kingdom(rng: &mut GameRng) -> KingdomSelection {
    let mut pool = KINGDOM_CARDS;
    rng.shuffle(&mut pool);
    KingdomSelection::new(pool.into_iter().take(KINGDOM_SIZE))
}

fn refill(rng: &mut GameRng, state: &mut GameSnapshot, player: PlayerId, zone: Zone, len: usize) {
    state.empty_zone(player, zone);
    if let Some(cards) = state.zone_mut(player, zone) {
        for _ in 0..len {
            cards.push_back(random_card(rng));
        }
    }
    trace!(%player, %zone, len, "randomized zone");
}

/// Replace a player's hand with 5 or more random cards.
pub fn randomize_hand(rng: &mut GameRng, state: &mut GameSnapshot, player: PlayerId) {
    let max = MAX_DECK.saturating_sub(state.zone_len(player, Zone::Deck)).max(5);
    let len = rng.gen_inclusive(5, max);
    refill(rng, state, player, Zone::Hand, len);
}

/// Replace a player's deck with 2 or more random cards.
pub fn randomize_deck(rng: &mut GameRng, state: &mut GameSnapshot, player: PlayerId) {
    let max = MAX_HAND.saturating_sub(state.zone_len(player, Zone::Hand)).max(5);
    let len = rng.gen_inclusive(2, max);
    refill(rng, state, player, Zone::Deck, len);
}

/// Replace a player's discard pile with random cards (possibly none).
pub fn randomize_discard(rng: &mut GameRng, state: &mut GameSnapshot, player: PlayerId) {
    let max = MAX_DECK
        .saturating_sub(state.zone_len(player, Zone::Deck))
        .saturating_sub(state.zone_len(player, Zone::Discard))
        .max(5);
    let len = rng.gen_inclusive(0, max);
    refill(rng, state, player, Zone::Discard, len);
}

/// Randomize every player's hand, then every player's deck.
pub fn randomize_players(rng: &mut GameRng, state: &mut GameSnapshot) {
    for player in state.player_ids() {
        randomize_hand(rng, state, player);
    }
    for player in state.player_ids() {
        randomize_deck(rng, state, player);
    }
}
