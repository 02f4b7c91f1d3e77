//! Sea hag: every other player discards their top deck card and gains a
//! curse on top of their deck.

use crate::core::{Card, GameSnapshot, PlayerId, Zone};
use crate::delta::{
    all_others_top_of_deck_is, any_count_changed, combined_count_delta_excluding, count_did_change,
    first_occurrence, kingdom_card_supply_delta, victory_card_supply_delta, zone_did_change,
};
use crate::report::NamedProperty;

use super::battery::PropertyBattery;

const SUBJECT: &str = "seaHagEffect";

pub struct SeaHagBattery;

impl PropertyBattery for SeaHagBattery {
    fn card(&self) -> Card {
        Card::SeaHag
    }

    fn subject(&self) -> &'static str {
        SUBJECT
    }

    fn required_cards(&self) -> &'static [Card] {
        &[Card::SeaHag, Card::Curse]
    }

    /// The player holds a sea hag and curses remain.
    fn ready(&self, state: &GameSnapshot, player: PlayerId) -> bool {
        first_occurrence(state, player, Zone::Hand, Card::SeaHag).is_some()
            && state.supply_of(Card::Curse).is_some_and(|n| n > 0)
    }

    fn properties(&self, pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId) -> Vec<NamedProperty> {
        let others = pre.player_count().saturating_sub(1);

        vec![
            NamedProperty::equal(
                SUBJECT,
                "There should NOT be any player whose hand count changes",
                false,
                any_count_changed(pre, post, Zone::Hand),
            ),
            NamedProperty::equal(
                SUBJECT,
                "All other players should have a curse on the top of their deck",
                true,
                all_others_top_of_deck_is(post, player, Card::Curse),
            ),
            NamedProperty::equal(
                SUBJECT,
                "The current player's discard count should NOT change",
                false,
                count_did_change(pre, post, player, Zone::Discard),
            ),
            NamedProperty::equal(
                SUBJECT,
                "All other player's discard count should increase by 1 (each)",
                others,
                combined_count_delta_excluding(pre, post, player, Zone::Discard),
            ),
            NamedProperty::equal(
                SUBJECT,
                "The current player's deck count should not change",
                false,
                count_did_change(pre, post, player, Zone::Deck),
            ),
            NamedProperty::equal(
                SUBJECT,
                "The current player's deck should not change",
                false,
                zone_did_change(pre, post, player, Zone::Deck),
            ),
            NamedProperty::equal(
                SUBJECT,
                "No state change should occur to the victory card pile",
                0i64,
                victory_card_supply_delta(pre, post),
            ),
            NamedProperty::equal(
                SUBJECT,
                "No state change should occur to the kingdom card pile",
                0i64,
                kingdom_card_supply_delta(pre, post),
            ),
        ]
    }
}
