//! Card-count deltas per zone.
//!
//! `difference` is signed (`post - pre`), `delta` is its magnitude. The
//! combined and `any_*` forms iterate over the seats of the `pre` snapshot.

use tracing::{debug, trace};

use crate::core::{GameSnapshot, PlayerId, Zone};

/// Signed change in a player's zone size: `post - pre`.
pub fn count_difference(pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId, zone: Zone) -> i64 {
    let before = pre.zone_len(player, zone);
    let after = post.zone_len(player, zone);
    trace!(%zone, %player, pre = before, post = after, "zone count");
    after as i64 - before as i64
}

/// Magnitude of [`count_difference`].
pub fn count_delta(pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId, zone: Zone) -> usize {
    count_difference(pre, post, player, zone).unsigned_abs() as usize
}

/// Sum of [`count_delta`] over every player except `excluded`.
pub fn combined_count_delta_excluding(
    pre: &GameSnapshot,
    post: &GameSnapshot,
    excluded: PlayerId,
    zone: Zone,
) -> usize {
    let delta = excluded
        .others(pre.player_count())
        .map(|p| count_delta(pre, post, p, zone))
        .sum();
    debug!(%zone, %excluded, delta, "zone count, other players combined");
    delta
}

/// Sum of [`count_delta`] over every player.
pub fn combined_count_delta_all(pre: &GameSnapshot, post: &GameSnapshot, zone: Zone) -> usize {
    let delta = pre
        .player_ids()
        .map(|p| count_delta(pre, post, p, zone))
        .sum();
    debug!(%zone, delta, "zone count, all players combined");
    delta
}

pub fn count_did_change(pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId, zone: Zone) -> bool {
    count_delta(pre, post, player, zone) != 0
}

/// True if any player other than `excluded` has a different zone size.
pub fn any_other_count_changed(
    pre: &GameSnapshot,
    post: &GameSnapshot,
    excluded: PlayerId,
    zone: Zone,
) -> bool {
    excluded
        .others(pre.player_count())
        .any(|p| count_did_change(pre, post, p, zone))
}

pub fn any_count_changed(pre: &GameSnapshot, post: &GameSnapshot, zone: Zone) -> bool {
    pre.player_ids().any(|p| count_did_change(pre, post, p, zone))
}

/// Signed change in a player's total cards (hand + deck + discard).
pub fn total_cards_difference(pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId) -> i64 {
    let before = pre.total_cards(player);
    let after = post.total_cards(player);
    trace!(%player, pre = before, post = after, "total cards");
    after as i64 - before as i64
}

pub fn total_cards_delta(pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId) -> usize {
    total_cards_difference(pre, post, player).unsigned_abs() as usize
}
