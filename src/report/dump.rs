//! Human-readable snapshot dumps for failed trials.

use std::io::{self, Write};

use crate::core::{Card, GameSnapshot, Zone};

/// Card names separated by `, `, or `EMPTY`.
pub fn write_cards<'a, W: Write>(w: &mut W, cards: impl IntoIterator<Item = &'a Card>) -> io::Result<()> {
    let mut cards = cards.into_iter().peekable();
    if cards.peek().is_none() {
        return writeln!(w, "EMPTY");
    }
    while let Some(card) = cards.next() {
        write!(w, "{card}")?;
        if cards.peek().is_some() {
            write!(w, ", ")?;
        }
    }
    writeln!(w)
}

/// Dump every player's zones and the supply under `label`.
pub fn write_snapshot<W: Write>(w: &mut W, label: &str, state: &GameSnapshot) -> io::Result<()> {
    writeln!(w, "{label}: Players: {}   Current: {}", state.player_count(), state.whose_turn)?;
    writeln!(
        w,
        "Actions: {}   Buys: {}   Played: {}   Coins: {}",
        state.num_actions, state.num_buys, state.played_card_count, state.coins
    )?;

    for zone in Zone::ALL {
        writeln!(w, "{}s:", capitalized(zone))?;
        for (player, zones) in state.players.iter() {
            write!(w, "  Player {player} ({}): ", zones.zone(zone).len())?;
            write_cards(w, zones.zone(zone).iter())?;
        }
    }

    writeln!(w, "Supply:")?;
    let mut piles: Vec<_> = state.supply.iter().collect();
    piles.sort();
    for (card, count) in piles {
        writeln!(w, "  {card}: {count}")?;
    }
    Ok(())
}

/// Dump the snapshots of a failed trial.
pub fn write_trial_dump<W: Write>(w: &mut W, pre: &GameSnapshot, post: &GameSnapshot) -> io::Result<()> {
    writeln!(w)?;
    write_snapshot(w, "PRE", pre)?;
    writeln!(w)?;
    write_snapshot(w, "POST", post)
}

fn capitalized(zone: Zone) -> &'static str {
    match zone {
        Zone::Hand => "Hand",
        Zone::Deck => "Deck",
        Zone::Discard => "Discard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use im::vector;

    #[test]
    fn test_write_cards() {
        let mut buf = Vec::new();
        write_cards(&mut buf, &[Card::Copper, Card::SeaHag]).unwrap();
        write_cards(&mut buf, std::iter::empty::<&Card>()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "copper, sea_hag\nEMPTY\n");
    }

    #[test]
    fn test_write_snapshot() {
        let mut state = GameSnapshot::new(2);
        state.whose_turn = PlayerId::new(1);
        state.players[PlayerId::new(1)].deck = vector![Card::Gold, Card::Curse];
        state.set_supply(Card::Curse, 10);

        let mut buf = Vec::new();
        write_snapshot(&mut buf, "PRE", &state).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("PRE: Players: 2   Current: 1\n"));
        assert!(text.contains("Decks:\n  Player 0 (0): EMPTY\n  Player 1 (2): gold, curse\n"));
        assert!(text.contains("Supply:\n  curse: 10\n"));
    }
}
