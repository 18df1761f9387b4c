// Copyright (C) 2026 Flopside developers.
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classification.
//!
//! The classifier counts rank and suit occurrences over the whole cards pool
//! and probes the ten hand categories from strongest to weakest. It provides
//! a [HandValue::eval] method that classifies a pool of five or more cards,
//! and a [HandValue::eval_best] method that enumerates every five-card
//! combination of a 5 to 7 cards hand and keeps the maximum, useful for
//! showdowns where a player holds 2 hole cards plus the board.
//!
//! A [HandValue] orders by category first then by its tie-break ranks, so
//! comparing two values resolves a showdown between two hands.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use flopside_cards::{Card, Rank, Suit};

use crate::error::EvalError;

/// The rank of a poker hand from the weakest to the strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRank {
    /// No pair, the highest card plays.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards of consecutive ranks, the ace plays low in the wheel.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight all in one suit.
    StraightFlush,
    /// The ace high straight flush.
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// An evaluated poker hand.
///
/// Holds the hand category, the tie-break ranks used to order hands within
/// the same category, and the five cards that make the hand ordered by
/// significance, the rank-group cards first then the kickers descending.
///
/// Ordering compares the category then the tie-break ranks, the stored cards
/// never participate so two equally strong hands in different suits compare
/// equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tie_break: Vec<Rank>,
    cards: Vec<Card>,
}

impl HandValue {
    /// Classifies a pool of five or more cards.
    ///
    /// Returns the best hand the whole pool makes: with exactly five cards
    /// this is the hand itself, with more the representative five cards are
    /// picked per category, the five highest cards of the flush suit for a
    /// flush, the highest run for a straight, the highest kickers for the
    /// paired hands.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        if cards.len() < 5 {
            return Err(EvalError::NotEnoughCards {
                got: cards.len(),
                need: 5,
            });
        }
        check_duplicates(cards)?;

        Ok(classify(cards))
    }

    /// Evaluates the best five-card hand out of a 5 to 7 cards pool.
    ///
    /// Enumerates every five-card combination, at most C(7,5)=21, and keeps
    /// the maximum by (category, tie-break) order. The first combination
    /// encountered wins exact ties, equally strong hands are interchangeable.
    pub fn eval_best(cards: &[Card]) -> Result<HandValue, EvalError> {
        if cards.len() < 5 {
            return Err(EvalError::NotEnoughCards {
                got: cards.len(),
                need: 5,
            });
        }
        check_duplicates(cards)?;

        let n = cards.len();
        let mut best: Option<HandValue> = None;

        for c1 in 0..(n - 4) {
            for c2 in (c1 + 1)..(n - 3) {
                for c3 in (c2 + 1)..(n - 2) {
                    for c4 in (c3 + 1)..(n - 1) {
                        for c5 in (c4 + 1)..n {
                            let hand =
                                [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let value = classify(&hand);
                            if best.as_ref().is_none_or(|b| value > *b) {
                                best = Some(value);
                            }
                        }
                    }
                }
            }
        }

        Ok(best.expect("at least one combination"))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks in decreasing significance.
    ///
    /// The vector layout depends on the category: `[quad, kicker]` for four
    /// of a kind, `[trips, pair]` for a full house, `[high]` for straights,
    /// all five ranks descending for flushes and high cards, and empty for
    /// the royal flush.
    pub fn tie_break(&self) -> &[Rank] {
        &self.tie_break
    }

    /// The five cards that make the hand, ordered by significance.
    pub fn hand(&self) -> &[Card] {
        &self.cards
    }

    /// A label for the hand embedding the deciding ranks.
    ///
    /// For example `"Four of a Kind (Ks)"`, `"Straight (5 high)"`, or
    /// `"Two Pair (As and Ks)"`.
    pub fn label(&self) -> String {
        let tb = &self.tie_break;
        match self.rank {
            HandRank::RoyalFlush => "Royal Flush".to_string(),
            HandRank::StraightFlush => format!("Straight Flush ({} high)", tb[0]),
            HandRank::FourOfAKind => format!("Four of a Kind ({})", tb[0].plural()),
            HandRank::FullHouse => {
                format!("Full House ({} over {})", tb[0].plural(), tb[1].plural())
            }
            HandRank::Flush => format!("Flush ({} high)", tb[0]),
            HandRank::Straight => format!("Straight ({} high)", tb[0]),
            HandRank::ThreeOfAKind => format!("Three of a Kind ({})", tb[0].plural()),
            HandRank::TwoPair => {
                format!("Two Pair ({} and {})", tb[0].plural(), tb[1].plural())
            }
            HandRank::OnePair => format!("One Pair ({})", tb[0].plural()),
            HandRank::HighCard => format!("High Card ({})", tb[0]),
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.tie_break == other.tie_break
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tie_break.cmp(&other.tie_break))
    }
}

/// Fails with [EvalError::DuplicateCard] if the same card appears twice.
pub(crate) fn check_duplicates(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = ahash::AHashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(card.id()) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}

/// Classifies a pool of at least five distinct cards.
fn classify(pool: &[Card]) -> HandValue {
    debug_assert!(pool.len() >= 5);

    let mut rank_counts = [0u8; 13];
    let mut suit_counts = [0u8; 4];
    let mut rank_mask = 0u16;
    for card in pool {
        rank_counts[card.rank_bits() as usize] += 1;
        suit_counts[suit_index(card.suit())] += 1;
        rank_mask |= card.rank_mask();
    }

    // The flush suit with the highest count, first encountered wins equal
    // counts. At most one suit can reach five in a 7 cards pool.
    let mut flush_suit = None;
    let mut flush_count = 0;
    for suit in Suit::suits() {
        let count = suit_counts[suit_index(suit)];
        if count >= 5 && count > flush_count {
            flush_suit = Some(suit);
            flush_count = count;
        }
    }

    // Royal and straight flushes come from runs within the flush suit only.
    if let Some(suit) = flush_suit {
        let mut flush_mask = 0u16;
        for card in pool.iter().filter(|c| c.suit() == suit) {
            flush_mask |= card.rank_mask();
        }

        if let Some(high) = straight_high(flush_mask) {
            let suited = pool
                .iter()
                .filter(|c| c.suit() == suit)
                .copied()
                .collect::<Vec<_>>();
            let cards = straight_cards(&suited, high);

            return if high == Rank::Ace {
                HandValue {
                    rank: HandRank::RoyalFlush,
                    tie_break: Vec::new(),
                    cards,
                }
            } else {
                HandValue {
                    rank: HandRank::StraightFlush,
                    tie_break: vec![high],
                    cards,
                }
            };
        }
    }

    let rank_at = |idx: usize| Rank::from_index(idx as u8).expect("rank index");

    // Four of a kind.
    if let Some(quad) = (0..13).rev().find(|&i| rank_counts[i] == 4).map(rank_at) {
        let mut cards = cards_of_rank(pool, quad);
        let kicker = highest_kickers(pool, &[quad], 1);
        let tie_break = vec![quad, kicker[0].rank()];
        cards.extend(kicker);
        return HandValue {
            rank: HandRank::FourOfAKind,
            tie_break,
            cards,
        };
    }

    // Full house: the highest trips plus the highest remaining pair, which
    // may itself come from a second trips in a 6 or 7 cards pool.
    if let Some(trips) = (0..13).rev().find(|&i| rank_counts[i] >= 3).map(rank_at) {
        let pair = (0..13)
            .rev()
            .filter(|&i| rank_counts[i] >= 2 && rank_at(i) != trips)
            .map(rank_at)
            .next();
        if let Some(pair) = pair {
            let mut cards = cards_of_rank(pool, trips);
            cards.truncate(3);
            let mut pair_cards = cards_of_rank(pool, pair);
            pair_cards.truncate(2);
            cards.extend(pair_cards);
            return HandValue {
                rank: HandRank::FullHouse,
                tie_break: vec![trips, pair],
                cards,
            };
        }
    }

    // Flush: the five highest cards of the flush suit.
    if let Some(suit) = flush_suit {
        let mut cards = pool
            .iter()
            .filter(|c| c.suit() == suit)
            .copied()
            .collect::<Vec<_>>();
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
        cards.truncate(5);
        let tie_break = cards.iter().map(|c| c.rank()).collect();
        return HandValue {
            rank: HandRank::Flush,
            tie_break,
            cards,
        };
    }

    // Straight: the highest run of five consecutive ranks.
    if let Some(high) = straight_high(rank_mask) {
        return HandValue {
            rank: HandRank::Straight,
            tie_break: vec![high],
            cards: straight_cards(pool, high),
        };
    }

    // Three of a kind.
    if let Some(trips) = (0..13).rev().find(|&i| rank_counts[i] >= 3).map(rank_at) {
        let mut cards = cards_of_rank(pool, trips);
        cards.truncate(3);
        let kickers = highest_kickers(pool, &[trips], 2);
        let mut tie_break = vec![trips];
        tie_break.extend(kickers.iter().map(|c| c.rank()));
        cards.extend(kickers);
        return HandValue {
            rank: HandRank::ThreeOfAKind,
            tie_break,
            cards,
        };
    }

    // Two pair: the two highest paired ranks plus the highest kicker.
    let pairs = (0..13)
        .rev()
        .filter(|&i| rank_counts[i] >= 2)
        .map(rank_at)
        .collect::<Vec<_>>();
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let mut cards = cards_of_rank(pool, high);
        cards.truncate(2);
        let mut low_cards = cards_of_rank(pool, low);
        low_cards.truncate(2);
        cards.extend(low_cards);
        let kicker = highest_kickers(pool, &[high, low], 1);
        let tie_break = vec![high, low, kicker[0].rank()];
        cards.extend(kicker);
        return HandValue {
            rank: HandRank::TwoPair,
            tie_break,
            cards,
        };
    }

    // One pair.
    if let Some(&pair) = pairs.first() {
        let mut cards = cards_of_rank(pool, pair);
        let kickers = highest_kickers(pool, &[pair], 3);
        let mut tie_break = vec![pair];
        tie_break.extend(kickers.iter().map(|c| c.rank()));
        cards.extend(kickers);
        return HandValue {
            rank: HandRank::OnePair,
            tie_break,
            cards,
        };
    }

    // High card: the five highest cards.
    let cards = highest_kickers(pool, &[], 5);
    let tie_break = cards.iter().map(|c| c.rank()).collect();
    HandValue {
        rank: HandRank::HighCard,
        tie_break,
        cards,
    }
}

#[inline]
fn suit_index(suit: Suit) -> usize {
    (suit as u8).trailing_zeros() as usize
}

/// The highest rank closing a run of five consecutive ranks, the wheel run
/// A-2-3-4-5 counts with high card five.
fn straight_high(mask: u16) -> Option<Rank> {
    const RUN: u16 = 0b1_1111;
    for shift in (0..=8u8).rev() {
        if (mask >> shift) & RUN == RUN {
            return Rank::from_index(shift + 4);
        }
    }

    const WHEEL: u16 = 0b1_0000_0000_1111;
    (mask & WHEEL == WHEEL).then_some(Rank::Five)
}

/// Picks one card per rank of the run closed by `high`, highest first. In
/// the wheel the ace closes the hand as the lowest card.
fn straight_cards(pool: &[Card], high: Rank) -> Vec<Card> {
    let ranks = if high == Rank::Five {
        vec![Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace]
    } else {
        (0..5)
            .map(|i| Rank::from_index(high as u8 - i).expect("run rank"))
            .collect()
    };

    ranks
        .into_iter()
        .map(|r| {
            *pool
                .iter()
                .find(|c| c.rank() == r)
                .expect("rank in straight run")
        })
        .collect()
}

/// The cards of a given rank in the pool.
fn cards_of_rank(pool: &[Card], rank: Rank) -> Vec<Card> {
    pool.iter().filter(|c| c.rank() == rank).copied().collect()
}

/// The `count` highest cards whose rank is not in `excluded`, descending.
fn highest_kickers(pool: &[Card], excluded: &[Rank], count: usize) -> Vec<Card> {
    let mut kickers = pool
        .iter()
        .filter(|c| !excluded.contains(&c.rank()))
        .copied()
        .collect::<Vec<_>>();
    kickers.sort_by(|a, b| b.rank().cmp(&a.rank()));
    kickers.truncate(count);
    kickers
}
