//! End-to-end scenarios: hand-built snapshots, an effect applied by hand,
//! and the deltas and reports that should come out.

use im::vector;

use dominion_check::core::{Card, GameSnapshot, PlayerId, ReportConfig, Zone};
use dominion_check::delta::{
    count_difference, kingdom_card_supply_delta, supply_difference, treasure_cards_in_zone, victory_card_supply_delta,
    zone_delta,
};
use dominion_check::report::Reporter;

/// Draw two cards: player 0 moves the top two deck cards into their hand.
#[test]
fn test_draw_two_scenario() {
    let p0 = PlayerId::new(0);
    let mut pre = GameSnapshot::new(2);
    pre.players[p0].hand = vector![Card::Copper, Card::Silver, Card::Adventurer];
    pre.players[p0].deck = vector![Card::Gold, Card::Copper];

    let mut post = pre.clone();
    for _ in 0..2 {
        let card = post.players[p0].deck.pop_back().unwrap();
        post.players[p0].hand.push_back(card);
    }

    assert_eq!(count_difference(&pre, &post, p0, Zone::Hand), 2);
    assert_eq!(zone_delta(&pre, &post, p0, Zone::Deck), 2);
    let treasure_gain =
        treasure_cards_in_zone(&post, p0, Zone::Hand) as i64 - treasure_cards_in_zone(&pre, p0, Zone::Hand) as i64;
    assert_eq!(treasure_gain, 2);

    // Pre is untouched by the effect on post.
    assert_eq!(pre.zone_len(p0, Zone::Deck), 2);
}

/// Curse each other player in a three-player game.
#[test]
fn test_curse_others_scenario() {
    let mut pre = GameSnapshot::new(3);
    pre.set_supply(Card::Curse, 3);
    pre.set_supply(Card::Estate, 12);
    pre.set_supply(Card::SeaHag, 10);

    let mut post = pre.clone();
    for other in PlayerId::new(0).others(3) {
        post.players[other].deck.push_back(Card::Curse);
        let left = post.supply_of(Card::Curse).unwrap();
        post.set_supply(Card::Curse, left - 1);
    }

    assert_eq!(supply_difference(&pre, &post, Card::Curse), -2);
    // Curse is neither a victory nor a kingdom pile.
    assert_eq!(victory_card_supply_delta(&pre, &post), 0);
    assert_eq!(kingdom_card_supply_delta(&pre, &post), 0);
}

#[test]
fn test_assertion_output_scenario() {
    let mut loud = Reporter::new(ReportConfig::default(), Vec::new(), Vec::new());
    assert!(loud.assert_equal_int("f", "rule", 5, 5));
    let out = String::from_utf8(loud.into_parts().0).unwrap();
    assert!(out.contains("PASS"));

    let quiet_config = ReportConfig::default().with_print_on_success(false);
    let mut quiet = Reporter::new(quiet_config, Vec::new(), Vec::new());
    assert!(quiet.assert_equal_int("f", "rule", 5, 5));
    assert!(quiet.out().is_empty());

    assert!(!quiet.assert_equal_int("f", "rule", 5, 6));
    let out = String::from_utf8(quiet.into_parts().0).unwrap();
    assert!(out.contains("FAIL"));
    assert!(out.contains('5'));
    assert!(out.contains('6'));
}
