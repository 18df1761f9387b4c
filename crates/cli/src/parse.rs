// Copyright (C) 2026 Flopside developers.
// SPDX-License-Identifier: Apache-2.0

//! Card strings parsing.
//!
//! Parsing happens here at the host boundary, the evaluator only ever sees
//! typed cards. A card is a rank character (`2`-`9`, `T` or `10`, `J`, `Q`,
//! `K`, `A`) followed by a suit character (`S`, `H`, `D`, `C`), case
//! insensitive.
use anyhow::{Result, anyhow, bail};

use flopside_cards::{Card, Rank, Suit};
use flopside_eval::Player;

/// Parses a single card like "AS" or "10h".
pub fn parse_card(s: &str) -> Result<Card> {
    let s = s.trim();
    if !s.is_ascii() || s.len() < 2 {
        bail!("invalid card {s:?}");
    }

    let s = s.to_ascii_uppercase();
    let (rank, suit) = s.split_at(s.len() - 1);

    let rank = match rank {
        "2" => Rank::Deuce,
        "3" => Rank::Trey,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "T" | "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        _ => bail!("invalid rank {rank:?} in card {s:?}"),
    };

    let suit = match suit {
        "S" => Suit::Spades,
        "H" => Suit::Hearts,
        "D" => Suit::Diamonds,
        "C" => Suit::Clubs,
        _ => bail!("invalid suit {suit:?} in card {s:?}"),
    };

    Ok(Card::new(rank, suit))
}

/// Parses a comma or space separated list of cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split([',', ' '])
        .filter(|t| !t.is_empty())
        .map(parse_card)
        .collect()
}

/// Parses exactly two hole cards.
pub fn parse_hole(s: &str) -> Result<[Card; 2]> {
    let cards = parse_cards(s)?;
    match cards.as_slice() {
        &[first, second] => Ok([first, second]),
        _ => bail!("expected 2 hole cards, got {}", cards.len()),
    }
}

/// Parses a player given as "NAME:C1,C2".
pub fn parse_player(s: &str, id: u32) -> Result<Player> {
    let (name, hole) = s
        .split_once(':')
        .ok_or_else(|| anyhow!("expected NAME:C1,C2, got {s:?}"))?;

    let name = name.trim();
    if name.is_empty() {
        bail!("empty player name in {s:?}");
    }

    Ok(Player {
        id,
        name: name.to_string(),
        hole: parse_hole(hole)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_cards() {
        assert_eq!(parse_card("AS").unwrap(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(parse_card("th").unwrap(), Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(
            parse_card("10d").unwrap(),
            Card::new(Rank::Ten, Suit::Diamonds)
        );
        assert_eq!(
            parse_card(" 2c ").unwrap(),
            Card::new(Rank::Deuce, Suit::Clubs)
        );

        assert!(parse_card("").is_err());
        assert!(parse_card("A").is_err());
        assert!(parse_card("1S").is_err());
        assert!(parse_card("AX").is_err());
        assert!(parse_card("A♠").is_err());
    }

    #[test]
    fn parse_card_lists() {
        let cards = parse_cards("AS,KS QS").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2], Card::new(Rank::Queen, Suit::Spades));

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("AS,XX").is_err());
    }

    #[test]
    fn parse_hole_pairs() {
        let hole = parse_hole("AS,AH").unwrap();
        assert_eq!(hole[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(hole[1], Card::new(Rank::Ace, Suit::Hearts));

        assert!(parse_hole("AS").is_err());
        assert!(parse_hole("AS,AH,AD").is_err());
    }

    #[test]
    fn parse_players() {
        let player = parse_player("Alice:AS,AH", 1).unwrap();
        assert_eq!(player.id, 1);
        assert_eq!(player.name, "Alice");
        assert_eq!(player.hole[0], Card::new(Rank::Ace, Suit::Spades));

        assert!(parse_player("Alice", 1).is_err());
        assert!(parse_player(":AS,AH", 1).is_err());
        assert!(parse_player("Alice:AS", 1).is_err());
    }
}
