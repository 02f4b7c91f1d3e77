//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! 0-based seat index. A game has between [`MIN_PLAYERS`] and
//! [`MAX_PLAYERS`] seats.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a `Vec`, indexed by `PlayerId`. Lookups
//! with a seat outside the game return `None` from [`PlayerMap::get`]
//! rather than panicking, so delta functions stay total.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game supports.
pub const MAX_PLAYERS: usize = 4;

/// Seat index of a player (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat index as `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every seat of a `player_count`-player game.
    ///
    /// ```
    /// use dominion_check::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize) as u8).map(PlayerId)
    }

    /// Iterate over every seat except `self`.
    pub fn others(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        Self::all(player_count).filter(move |&p| p != self)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-player data with one entry per seat.
///
/// ```
/// use dominion_check::core::{PlayerId, PlayerMap};
///
/// let mut buys: PlayerMap<u32> = PlayerMap::with_default(2);
/// buys[PlayerId::new(1)] += 1;
/// assert_eq!(buys.get(PlayerId::new(1)), Some(&1));
/// assert_eq!(buys.get(PlayerId::new(3)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map calling `factory` once per seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= u8::MAX as usize, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Entry for `player`, or `None` when the seat is not in the game.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

/// Panics when the seat is not in the game; use [`PlayerMap::get`] for
/// untrusted seats.
impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p2 = PlayerId::new(2);
        assert_eq!(p2.index(), 2);
        assert_eq!(format!("{}", p2), "2");
    }

    #[test]
    fn test_others() {
        let others: Vec<_> = PlayerId::new(1).others(4).collect();
        assert_eq!(others, vec![PlayerId::new(0), PlayerId::new(2), PlayerId::new(3)]);

        // A seat outside the game excludes nobody.
        assert_eq!(PlayerId::new(7).others(2).count(), 2);
    }

    #[test]
    fn test_player_map_lookup() {
        let map: PlayerMap<usize> = PlayerMap::new(3, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map.get(PlayerId::new(1)), Some(&10));
        assert_eq!(map.get(PlayerId::new(3)), None);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_iter_mut() {
        let mut map: PlayerMap<i32> = PlayerMap::with_default(2);
        for (player, value) in map.iter_mut() {
            *value = player.index() as i32 + 1;
        }
        let values: Vec<_> = map.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _ = PlayerMap::<u8>::with_default(0);
    }
}
