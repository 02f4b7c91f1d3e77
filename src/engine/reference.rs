//! Reference engine used by the driver binary and the tests.
//!
//! Implements only what the trial drivers exercise:
//! - Game set-up (supply sizes, starting decks, opening hand)
//! - Drawing, with the discard reshuffled into an empty deck
//! - Adventurer and sea hag effects
//!
//! Every other card effect returns [`EngineError::UnsupportedEffect`].

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::traits::{GameEngine, KingdomSelection};
use crate::core::{
    Card, EngineError, GameRng, GameSnapshot, PlayerId, Zone, KINGDOM_CARDS, MAX_PLAYERS, MIN_PLAYERS,
};

/// Cards dealt to the first player at set-up.
const OPENING_HAND: usize = 5;

/// Treasures adventurer looks for.
const ADVENTURER_TREASURES: usize = 2;

/// Engine with correct adventurer and sea hag rules.
#[derive(Clone, Debug)]
pub struct ReferenceEngine {
    rng: GameRng,
}

impl Default for ReferenceEngine {
    fn default() -> Self {
        Self { rng: GameRng::new(0) }
    }
}

impl ReferenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn supply_for(player_count: usize, kingdom: &KingdomSelection) -> FxHashMap<Card, i32> {
        let victory = if player_count == 2 { 8 } else { 12 };
        let mut supply = FxHashMap::default();

        supply.insert(Card::Curse, 10 * (player_count as i32 - 1));
        supply.insert(Card::Estate, victory);
        supply.insert(Card::Duchy, victory);
        supply.insert(Card::Province, victory);
        supply.insert(Card::Copper, 60 - 7 * player_count as i32);
        supply.insert(Card::Silver, 40);
        supply.insert(Card::Gold, 30);

        for &card in KINGDOM_CARDS.iter().filter(|&&c| kingdom.contains(c)) {
            let count = if card.is_victory() { victory } else { 10 };
            supply.insert(card, count);
        }
        supply
    }

    /// Move a player's discard into their deck and shuffle it.
    fn reshuffle(&mut self, state: &mut GameSnapshot, player: PlayerId) {
        let zones = &mut state.players[player];
        let mut cards: Vec<Card> = zones.discard.iter().copied().collect();
        self.rng.shuffle(&mut cards);
        zones.deck.extend(cards);
        zones.discard.clear();
    }

    /// Draw the top card of a player's deck into their hand.
    pub fn draw_card(&mut self, state: &mut GameSnapshot, player: PlayerId) -> Result<Card, EngineError> {
        if state.players.get(player).is_none() {
            return Err(EngineError::PlayerOutOfRange(player));
        }
        if state.zone_len(player, Zone::Hand) >= Zone::Hand.capacity() {
            return Err(EngineError::ZoneFull { player, zone: Zone::Hand });
        }
        if state.zone_len(player, Zone::Deck) == 0 {
            self.reshuffle(state, player);
        }

        let zones = &mut state.players[player];
        let card = zones.deck.pop_back().ok_or(EngineError::NothingToDraw(player))?;
        zones.hand.push_back(card);
        Ok(card)
    }

    fn update_coins(state: &mut GameSnapshot, player: PlayerId) {
        state.coins = state
            .zone(player, Zone::Hand)
            .map_or(0, |hand| hand.iter().map(|c| c.coin_value()).sum());
    }

    /// Reveal cards until two treasures are drawn; the rest are discarded.
    fn adventurer(&mut self, player: PlayerId, state: &mut GameSnapshot) -> Result<(), EngineError> {
        let mut treasures = 0;
        let mut revealed = Vector::new();

        let outcome = loop {
            if treasures == ADVENTURER_TREASURES {
                break Ok(());
            }
            match self.draw_card(state, player) {
                Ok(card) if card.is_treasure() => treasures += 1,
                Ok(_) => {
                    if let Some(card) = state.players[player].hand.pop_back() {
                        revealed.push_back(card);
                    }
                }
                Err(EngineError::NothingToDraw(_)) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        debug!(%player, treasures, revealed = revealed.len(), "adventurer resolved");
        state.players[player].discard.append(revealed);
        Self::update_coins(state, player);
        outcome
    }

    /// Each other player discards their top deck card, then gains a curse
    /// on top of their deck while curses remain.
    ///
    /// Every discard pile is checked for room first, so a full pile leaves
    /// the state untouched.
    fn sea_hag(&mut self, player: PlayerId, state: &mut GameSnapshot) -> Result<(), EngineError> {
        if let Some(full) = player
            .others(state.player_count())
            .find(|&other| state.zone_len(other, Zone::Discard) >= Zone::Discard.capacity())
        {
            return Err(EngineError::ZoneFull { player: full, zone: Zone::Discard });
        }

        for other in player.others(state.player_count()) {
            let zones = &mut state.players[other];
            if let Some(top) = zones.deck.pop_back() {
                zones.discard.push_back(top);
            }

            let curses = state.supply_of(Card::Curse).unwrap_or(0);
            if curses > 0 {
                state.set_supply(Card::Curse, curses - 1);
                state.players[other].deck.push_back(Card::Curse);
            }
        }
        debug!(%player, "sea hag resolved");
        Ok(())
    }
}

impl GameEngine for ReferenceEngine {
    fn initialize_game(
        &mut self,
        player_count: usize,
        kingdom: &KingdomSelection,
        seed: u64,
    ) -> Result<GameSnapshot, EngineError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(EngineError::InvalidPlayerCount(player_count));
        }
        if let Some(card) = kingdom.first_duplicate() {
            return Err(EngineError::DuplicateKingdomCard(card));
        }

        self.rng = GameRng::new(seed);
        let mut state = GameSnapshot::new(player_count);
        state.supply = Self::supply_for(player_count, kingdom);

        for player in state.player_ids() {
            let mut deck: Vec<Card> = std::iter::repeat(Card::Estate)
                .take(3)
                .chain(std::iter::repeat(Card::Copper).take(7))
                .collect();
            self.rng.shuffle(&mut deck);
            state.players[player].deck = deck.into_iter().collect();
        }

        state.whose_turn = PlayerId::new(0);
        state.num_actions = 1;
        state.num_buys = 1;

        let first = state.whose_turn;
        for _ in 0..OPENING_HAND {
            self.draw_card(&mut state, first)?;
        }
        Self::update_coins(&mut state, first);

        debug!(player_count, seed, "game initialized");
        Ok(state)
    }

    fn card_effect(&mut self, card: Card, player: PlayerId, state: &mut GameSnapshot) -> Result<(), EngineError> {
        if player.index() >= state.player_count() {
            return Err(EngineError::PlayerOutOfRange(player));
        }
        match card {
            Card::Adventurer => self.adventurer(player, state),
            Card::SeaHag => self.sea_hag(player, state),
            other => Err(EngineError::UnsupportedEffect(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::vector;

    fn kingdom() -> KingdomSelection {
        KingdomSelection::new([
            Card::Adventurer,
            Card::Gardens,
            Card::Embargo,
            Card::Village,
            Card::Minion,
            Card::SeaHag,
            Card::Tribute,
            Card::Smithy,
            Card::GreatHall,
            Card::Steward,
        ])
    }

    #[test]
    fn test_initialize_two_players() {
        let mut engine = ReferenceEngine::new();
        let state = engine.initialize_game(2, &kingdom(), 1).unwrap();

        assert_eq!(state.supply_of(Card::Curse), Some(10));
        assert_eq!(state.supply_of(Card::Province), Some(8));
        assert_eq!(state.supply_of(Card::Copper), Some(46));
        assert_eq!(state.supply_of(Card::Gardens), Some(8));
        assert_eq!(state.supply_of(Card::Smithy), Some(10));
        assert_eq!(state.supply_of(Card::Mine), None);
        assert_eq!(engine.supply_count(Card::Mine, &state), -1);

        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        assert_eq!(state.zone_len(p0, Zone::Hand), 5);
        assert_eq!(state.zone_len(p0, Zone::Deck), 5);
        assert_eq!(state.zone_len(p1, Zone::Deck), 10);
        assert_eq!(engine.full_deck_count(p1, Card::Estate, &state), 3);
        assert_eq!(engine.whose_turn(&state), p0);
        assert_eq!(state.num_actions, 1);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_initialize_four_players_supply() {
        let mut engine = ReferenceEngine::new();
        let state = engine.initialize_game(4, &kingdom(), 7).unwrap();
        assert_eq!(state.supply_of(Card::Curse), Some(30));
        assert_eq!(state.supply_of(Card::Duchy), Some(12));
        assert_eq!(state.supply_of(Card::Copper), Some(32));
    }

    #[test]
    fn test_initialize_rejects_bad_input() {
        let mut engine = ReferenceEngine::new();
        assert_eq!(
            engine.initialize_game(5, &kingdom(), 1),
            Err(EngineError::InvalidPlayerCount(5))
        );
        let dup = KingdomSelection::new([Card::Mine, Card::Mine]);
        assert_eq!(
            engine.initialize_game(2, &dup, 1),
            Err(EngineError::DuplicateKingdomCard(Card::Mine))
        );
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = ReferenceEngine::new().initialize_game(3, &kingdom(), 11).unwrap();
        let b = ReferenceEngine::new().initialize_game(3, &kingdom(), 11).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let mut engine = ReferenceEngine::new();
        let mut state = GameSnapshot::new(2);
        let p = PlayerId::new(0);
        state.players[p].discard = vector![Card::Gold];

        assert_eq!(engine.draw_card(&mut state, p), Ok(Card::Gold));
        assert_eq!(state.zone_len(p, Zone::Discard), 0);
        assert_eq!(engine.draw_card(&mut state, p), Err(EngineError::NothingToDraw(p)));
    }

    #[test]
    fn test_adventurer_draws_two_treasures() {
        let mut engine = ReferenceEngine::new();
        let mut state = GameSnapshot::new(2);
        let p = PlayerId::new(0);
        state.players[p].hand = vector![Card::Adventurer];
        state.players[p].deck = vector![Card::Estate, Card::Silver, Card::Smithy, Card::Copper];

        engine.card_effect(Card::Adventurer, p, &mut state).unwrap();

        assert_eq!(state.players[p].hand, vector![Card::Adventurer, Card::Copper, Card::Silver]);
        assert_eq!(state.players[p].deck, vector![Card::Estate]);
        assert_eq!(state.players[p].discard, vector![Card::Smithy]);
        assert_eq!(state.coins, 3);
    }

    #[test]
    fn test_adventurer_stops_when_out_of_cards() {
        let mut engine = ReferenceEngine::new();
        let mut state = GameSnapshot::new(2);
        let p = PlayerId::new(1);
        state.players[p].deck = vector![Card::Gold, Card::Estate];

        engine.card_effect(Card::Adventurer, p, &mut state).unwrap();

        assert_eq!(state.players[p].hand, vector![Card::Gold]);
        assert_eq!(state.players[p].discard, vector![Card::Estate]);
    }

    #[test]
    fn test_sea_hag_curses_others() {
        let mut engine = ReferenceEngine::new();
        let mut state = GameSnapshot::new(3);
        state.set_supply(Card::Curse, 1);
        for player in state.player_ids() {
            state.players[player].deck = vector![Card::Copper, Card::Estate];
        }

        engine.card_effect(Card::SeaHag, PlayerId::new(0), &mut state).unwrap();

        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);
        assert_eq!(state.players[p0].deck, vector![Card::Copper, Card::Estate]);
        assert_eq!(state.players[p1].deck, vector![Card::Copper, Card::Curse]);
        assert_eq!(state.players[p1].discard, vector![Card::Estate]);
        // Only one curse was left.
        assert_eq!(state.players[p2].deck, vector![Card::Copper]);
        assert_eq!(state.players[p2].discard, vector![Card::Estate]);
        assert_eq!(state.supply_of(Card::Curse), Some(0));
    }

    #[test]
    fn test_sea_hag_full_discard_changes_nothing() {
        let mut engine = ReferenceEngine::new();
        let mut state = GameSnapshot::new(3);
        state.set_supply(Card::Curse, 20);
        for player in state.player_ids() {
            state.players[player].deck = vector![Card::Copper, Card::Estate];
        }
        let p2 = PlayerId::new(2);
        for _ in 0..Zone::Discard.capacity() {
            state.players[p2].discard.push_back(Card::Copper);
        }
        let before = state.clone();

        assert_eq!(
            engine.card_effect(Card::SeaHag, PlayerId::new(0), &mut state),
            Err(EngineError::ZoneFull { player: p2, zone: Zone::Discard })
        );
        // Player 1 comes first but must not be half-resolved.
        assert_eq!(state, before);
    }

    #[test]
    fn test_effects_use_seats_from_deserialized_zones() {
        let mut json = serde_json::to_value(GameSnapshot::new(2)).unwrap();
        json["player_count"] = serde_json::json!(3);
        let mut state: GameSnapshot = serde_json::from_value(json).unwrap();
        state.set_supply(Card::Curse, 10);

        let mut engine = ReferenceEngine::new();
        engine.card_effect(Card::SeaHag, PlayerId::new(0), &mut state).unwrap();
        assert_eq!(state.top_of_deck(PlayerId::new(1)), Some(Card::Curse));
        assert_eq!(state.supply_of(Card::Curse), Some(9));

        assert_eq!(
            engine.card_effect(Card::Adventurer, PlayerId::new(2), &mut state),
            Err(EngineError::PlayerOutOfRange(PlayerId::new(2)))
        );
    }

    #[test]
    fn test_unsupported_effect() {
        let mut engine = ReferenceEngine::new();
        let mut state = GameSnapshot::new(2);
        assert_eq!(
            engine.card_effect(Card::Smithy, PlayerId::new(0), &mut state),
            Err(EngineError::UnsupportedEffect(Card::Smithy))
        );
        assert_eq!(
            engine.card_effect(Card::SeaHag, PlayerId::new(2), &mut state),
            Err(EngineError::PlayerOutOfRange(PlayerId::new(2)))
        );
    }
}
