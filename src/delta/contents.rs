//! Zone-content deltas.
//!
//! `zone_delta` folds a size change and positional changes into one number:
//! `|len(post) - len(pre)|` plus the number of positions in the shared
//! prefix holding a different card. It answers "did anything in this zone
//! change", not "what moved where".

use im::Vector;
use tracing::{debug, trace};

use crate::core::{Card, GameSnapshot, PlayerId, Zone};

fn zone_or_empty<'a>(state: &'a GameSnapshot, player: PlayerId, zone: Zone, empty: &'a Vector<Card>) -> &'a Vector<Card> {
    state.zone(player, zone).unwrap_or(empty)
}

/// Size change plus positional mismatches for one player's zone.
pub fn zone_delta(pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId, zone: Zone) -> usize {
    let empty = Vector::new();
    let before = zone_or_empty(pre, player, zone, &empty);
    let after = zone_or_empty(post, player, zone, &empty);

    let mismatched = before
        .iter()
        .zip(after.iter())
        .filter(|(b, a)| b != a)
        .count();
    let delta = before.len().abs_diff(after.len()) + mismatched;

    trace!(%zone, %player, pre = before.len(), post = after.len(), delta, "zone contents");
    delta
}

pub fn combined_zone_delta_excluding(
    pre: &GameSnapshot,
    post: &GameSnapshot,
    excluded: PlayerId,
    zone: Zone,
) -> usize {
    let delta = excluded
        .others(pre.player_count())
        .map(|p| zone_delta(pre, post, p, zone))
        .sum();
    debug!(%zone, %excluded, delta, "zone contents, other players combined");
    delta
}

pub fn combined_zone_delta_all(pre: &GameSnapshot, post: &GameSnapshot, zone: Zone) -> usize {
    let delta = pre.player_ids().map(|p| zone_delta(pre, post, p, zone)).sum();
    debug!(%zone, delta, "zone contents, all players combined");
    delta
}

pub fn zone_did_change(pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId, zone: Zone) -> bool {
    zone_delta(pre, post, player, zone) != 0
}

/// True if any player other than `excluded` has a changed zone.
pub fn any_other_zone_changed(pre: &GameSnapshot, post: &GameSnapshot, excluded: PlayerId, zone: Zone) -> bool {
    excluded
        .others(pre.player_count())
        .any(|p| zone_did_change(pre, post, p, zone))
}

pub fn any_zone_changed(pre: &GameSnapshot, post: &GameSnapshot, zone: Zone) -> bool {
    pre.player_ids().any(|p| zone_did_change(pre, post, p, zone))
}
