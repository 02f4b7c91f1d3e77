//! Delta/property engine: read-only functions over a `pre` and `post`
//! snapshot (or a single snapshot).
//!
//! Every function is total. A seat outside the game reads as empty zones, a
//! malformed positional request yields `None`, and no input is mutated.
//!
//! Zone-parameterised families replace per-zone copies: pass
//! `Zone::Hand`, `Zone::Deck` or `Zone::Discard`.
//!
//! - `counts`: zone sizes (`count_difference`, `count_delta`, ...)
//! - `contents`: zone contents (`zone_delta`, ...)
//! - `positions`: `nth_occurrence`, top of deck
//! - `tallies`: card kinds, treasure, supply piles
//! - `turn`: action/buy/played counters

pub mod contents;
pub mod counts;
pub mod positions;
pub mod tallies;
pub mod turn;

pub use contents::{
    any_other_zone_changed, any_zone_changed, combined_zone_delta_all, combined_zone_delta_excluding,
    zone_delta, zone_did_change,
};
pub use counts::{
    any_count_changed, any_other_count_changed, combined_count_delta_all, combined_count_delta_excluding,
    count_delta, count_did_change, count_difference, total_cards_delta, total_cards_difference,
};
pub use positions::{
    all_others_top_of_deck_is, first_occurrence, last_occurrence, nth_occurrence, top_of_deck, top_of_deck_is,
};
pub use tallies::{
    card_count_difference_in_full_deck, card_count_difference_in_zone, count_of_card_in_full_deck,
    count_of_card_in_zone, is_treasure_card, kingdom_card_supply_delta, supply_delta, supply_did_change,
    supply_difference, treasure_cards_in_zone, treasure_difference_in_zone, victory_card_supply_delta,
};
pub use turn::{actions_difference, buys_difference, cards_played_difference, coins_difference};
