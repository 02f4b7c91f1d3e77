//! Adventurer: reveal cards until two treasures are drawn.

use crate::core::{Card, GameSnapshot, PlayerId, Zone, MAX_HAND};
use crate::delta::{
    any_other_zone_changed, count_difference, kingdom_card_supply_delta, treasure_cards_in_zone,
    treasure_difference_in_zone, victory_card_supply_delta,
};
use crate::report::NamedProperty;

use super::battery::PropertyBattery;

const SUBJECT: &str = "adventurerEffect";

/// Treasures the effect draws.
const DRAWN: usize = 2;

pub struct AdventurerBattery;

impl AdventurerBattery {
    /// Last two hand cards are treasures and the card under them is the
    /// hand's previous last card.
    fn drawn_on_top(pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId) -> (bool, bool) {
        let Some(hand) = post.zone(player, Zone::Hand) else {
            return (false, false);
        };
        let len = hand.len();
        if len < DRAWN {
            return (false, false);
        }
        let treasures = hand.iter().skip(len - DRAWN).all(|c| c.is_treasure());

        let before = pre.zone(player, Zone::Hand).and_then(|h| h.last());
        let under = (len > DRAWN).then(|| hand.get(len - DRAWN - 1)).flatten();
        (treasures, before == under)
    }
}

impl PropertyBattery for AdventurerBattery {
    fn card(&self) -> Card {
        Card::Adventurer
    }

    fn subject(&self) -> &'static str {
        SUBJECT
    }

    fn required_cards(&self) -> &'static [Card] {
        &[Card::Adventurer]
    }

    fn ready(&self, state: &GameSnapshot, player: PlayerId) -> bool {
        state.zone_len(player, Zone::Hand) + DRAWN <= MAX_HAND
    }

    fn properties(&self, pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId) -> Vec<NamedProperty> {
        let in_deck = treasure_cards_in_zone(pre, player, Zone::Deck);
        let in_discard = treasure_cards_in_zone(pre, player, Zone::Discard);
        let drawn = DRAWN as i64;
        let mut checks = Vec::with_capacity(11);

        if in_deck + in_discard >= DRAWN {
            checks.push(NamedProperty::equal(
                SUBJECT,
                "The current player should receive exactly 2 additional cards",
                drawn,
                count_difference(pre, post, player, Zone::Hand),
            ));
            checks.push(NamedProperty::equal(
                SUBJECT,
                "The current player's hand should have exactly 2 additional treasure cards",
                drawn,
                treasure_difference_in_zone(pre, post, player, Zone::Hand),
            ));

            let (treasures, preserved) = Self::drawn_on_top(pre, post, player);
            checks.push(NamedProperty::equal(
                SUBJECT,
                "The last 2 cards in the current player's hand should be treasure cards",
                true,
                treasures,
            ));
            checks.push(NamedProperty::equal(
                SUBJECT,
                "The current player's previous last hand card should sit under the drawn cards",
                true,
                preserved,
            ));
        }

        if in_deck >= DRAWN {
            checks.push(NamedProperty::at_most(
                SUBJECT,
                "The current player's deck count should decrease by at least 2",
                -drawn,
                count_difference(pre, post, player, Zone::Deck),
            ));
            checks.push(NamedProperty::equal(
                SUBJECT,
                "The current player's deck should have exactly 2 fewer treasure cards",
                -drawn,
                treasure_difference_in_zone(pre, post, player, Zone::Deck),
            ));
        }

        checks.push(NamedProperty::equal(
            SUBJECT,
            "No other player's hand should change",
            false,
            any_other_zone_changed(pre, post, player, Zone::Hand),
        ));
        checks.push(NamedProperty::equal(
            SUBJECT,
            "No other player's deck should change",
            false,
            any_other_zone_changed(pre, post, player, Zone::Deck),
        ));
        checks.push(NamedProperty::equal(
            SUBJECT,
            "No other player's discard pile should change",
            false,
            any_other_zone_changed(pre, post, player, Zone::Discard),
        ));
        checks.push(NamedProperty::equal(
            SUBJECT,
            "No state change should occur to the victory card pile",
            0i64,
            victory_card_supply_delta(pre, post),
        ));
        checks.push(NamedProperty::equal(
            SUBJECT,
            "No state change should occur to the kingdom card pile",
            0i64,
            kingdom_card_supply_delta(pre, post),
        ));
        checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::vector;

    fn pre() -> GameSnapshot {
        let mut state = GameSnapshot::new(2);
        let p = PlayerId::new(0);
        state.players[p].hand = vector![Card::Adventurer, Card::Estate];
        state.players[p].deck = vector![Card::Gold, Card::Smithy, Card::Copper];
        state.players[PlayerId::new(1)].deck = vector![Card::Silver];
        state
    }

    #[test]
    fn test_correct_effect_passes_everything() {
        let pre = pre();
        let mut post = pre.clone();
        let p = PlayerId::new(0);
        post.players[p].hand = vector![Card::Adventurer, Card::Estate, Card::Copper, Card::Gold];
        post.players[p].deck = vector![];
        post.players[p].discard = vector![Card::Smithy];

        let checks = AdventurerBattery.properties(&pre, &post, p);
        assert_eq!(checks.len(), 11);
        assert!(checks.iter().all(NamedProperty::evaluate));
    }

    #[test]
    fn test_conditional_checks_left_out() {
        let mut pre = pre();
        let p = PlayerId::new(0);
        pre.players[p].deck = vector![Card::Estate, Card::Gold];
        let post = pre.clone();

        // One treasure available: only the five unconditional checks apply.
        let checks = AdventurerBattery.properties(&pre, &post, p);
        assert_eq!(checks.len(), 5);
    }

    #[test]
    fn test_wrong_effect_fails() {
        let pre = pre();
        let mut post = pre.clone();
        let p = PlayerId::new(0);
        // Drew a single card and touched the other player.
        post.players[p].hand.push_back(Card::Copper);
        post.players[p].deck.pop_back();
        post.players[PlayerId::new(1)].deck.clear();

        let failed: Vec<_> = AdventurerBattery
            .properties(&pre, &post, p)
            .into_iter()
            .filter(|c| !c.evaluate())
            .map(|c| c.rule)
            .collect();
        assert!(failed.contains(&"The current player should receive exactly 2 additional cards".to_string()));
        assert!(failed.contains(&"No other player's deck should change".to_string()));
    }

    #[test]
    fn test_ready_needs_hand_room() {
        let mut state = GameSnapshot::new(2);
        let p = PlayerId::new(0);
        assert!(AdventurerBattery.ready(&state, p));
        for _ in 0..MAX_HAND - 1 {
            state.players[p].hand.push_back(Card::Estate);
        }
        assert!(!AdventurerBattery.ready(&state, p));
    }
}
