//! Trial driver and reference engine tests.

use dominion_check::core::{Card, GameSnapshot, PlayerId, ReportConfig, TrialConfig, Zone};
use dominion_check::delta::count_difference;
use dominion_check::engine::{GameEngine, KingdomSelection, ReferenceEngine};
use dominion_check::report::Reporter;
use dominion_check::trial::{battery_for, TrialDriver};

fn quiet_driver(card: Card, trials: usize, seed: u64) -> TrialDriver<ReferenceEngine, Vec<u8>, Vec<u8>> {
    let report = ReportConfig::default().with_print_on_success(false);
    let config = TrialConfig::new().with_trials(trials).with_seed(seed).with_report(report);
    let battery = battery_for(card).unwrap();
    TrialDriver::new(ReferenceEngine::new(), battery, config, Reporter::new(report, Vec::new(), Vec::new()))
}

/// Adventurer on a fresh two-player game with a fixed kingdom.
#[test]
fn test_adventurer_fixed_kingdom() {
    let kingdom = KingdomSelection::new([
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
    ]);
    let mut engine = ReferenceEngine::new();
    let mut state = engine.initialize_game(2, &kingdom, 1).unwrap();
    let pre = state.clone();

    let player = engine.whose_turn(&state);
    let last_card = *pre.zone(player, Zone::Hand).unwrap().last().unwrap();

    engine.card_effect(Card::Adventurer, player, &mut state).unwrap();

    assert_eq!(count_difference(&pre, &state, player, Zone::Hand), 2);
    let hand = state.zone(player, Zone::Hand).unwrap();
    let len = hand.len();
    assert!(hand[len - 1].is_treasure());
    assert!(hand[len - 2].is_treasure());
    assert_eq!(hand[len - 3], last_card);
}

#[test]
fn test_chained_trials_keep_snapshots_valid() {
    for card in [Card::Adventurer, Card::SeaHag] {
        let mut driver = quiet_driver(card, 0, 99);
        let mut state = driver.setup_game().unwrap();

        for _ in 0..100 {
            driver.chained_trial(&mut state);
            assert!(state.validate().is_ok(), "{card}: {:?}", state.validate());
            assert!(state.whose_turn.index() < state.player_count());
        }

        let totals = driver.totals();
        assert_eq!(totals.trials_run + totals.trials_skipped, 100);
        assert_eq!(totals.total_failed, 0);
    }
}

#[test]
fn test_reference_engine_passes_full_run() {
    for (card, seed) in [(Card::Adventurer, 1), (Card::SeaHag, 2)] {
        let mut driver = quiet_driver(card, 60, seed);
        let totals = driver.run();

        assert_eq!(totals.total_failed, 0, "{card} failed checks");
        assert_eq!(totals.setup_failures, 0);
        assert!(totals.total_passed > 0);

        let out = String::from_utf8(driver.into_reporter().into_parts().0).unwrap();
        assert!(!out.contains(":: FAIL ::"));
        assert!(out.trim_end().ends_with(&totals.to_string()));
    }
}

#[test]
fn test_sea_hag_phase_two_skips_without_sea_hag() {
    let mut driver = quiet_driver(Card::SeaHag, 0, 5);
    let mut state = GameSnapshot::new(2);
    state.set_supply(Card::Curse, 10);
    for player in state.player_ids() {
        state.players[player].hand = im::vector![Card::Copper];
        state.players[player].deck = im::vector![Card::Estate, Card::Estate];
    }

    assert_eq!(driver.chained_trial(&mut state), None);
    assert_eq!(driver.totals().trials_skipped, 1);
    assert_eq!(state.zone_len(PlayerId::new(0), Zone::Deck), 2);
}
