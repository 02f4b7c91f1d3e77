//! Property batteries: the named checks run for one card per trial.

use crate::core::{Card, GameSnapshot, PlayerId};
use crate::report::NamedProperty;

use super::adventurer::AdventurerBattery;
use super::sea_hag::SeaHagBattery;

/// The fixed list of checks for one card effect.
///
/// `properties` only computes; the driver records each property and
/// tallies the outcome.
pub trait PropertyBattery {
    /// Card whose effect is checked.
    fn card(&self) -> Card;

    /// Subject label printed on every line.
    fn subject(&self) -> &'static str;

    /// Cards that must be in the kingdom, by slot.
    fn required_cards(&self) -> &'static [Card] {
        &[]
    }

    /// Whether a chained trial can run for `player` from `state`.
    fn ready(&self, _state: &GameSnapshot, _player: PlayerId) -> bool {
        true
    }

    /// Checks comparing `pre` to `post` after `player` resolved the card.
    ///
    /// The list varies with `pre`: checks whose precondition does not
    /// hold are left out rather than failed.
    fn properties(&self, pre: &GameSnapshot, post: &GameSnapshot, player: PlayerId) -> Vec<NamedProperty>;
}

/// Battery checking `card`, if one exists.
pub fn battery_for(card: Card) -> Option<Box<dyn PropertyBattery>> {
    match card {
        Card::Adventurer => Some(Box::new(AdventurerBattery)),
        Card::SeaHag => Some(Box::new(SeaHagBattery)),
        _ => None,
    }
}
