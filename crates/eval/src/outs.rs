// Copyright (C) 2026 Flopside developers.
// SPDX-License-Identifier: Apache-2.0

//! Outs enumeration.
//!
//! An out is an unseen card that improves the current hand's category. The
//! enumerator scans every card left in the deck, classifies the hypothetical
//! hand it would make, and groups the improving cards by the label of the
//! hand they complete. Buckets carry the resulting [HandRank] next to the
//! label so callers sort structurally, the label is display only.
use ahash::AHashMap;
use serde::Serialize;

use flopside_cards::{Card, Deck};

use crate::error::EvalError;
use crate::eval::{self, HandRank, HandValue};

/// A group of improving cards completing the same hand.
#[derive(Debug, Clone, Serialize)]
pub struct OutsBucket {
    rank: HandRank,
    label: String,
    cards: Vec<Card>,
}

impl OutsBucket {
    /// The category of the improved hand.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The label of the improved hand, e.g. `"Straight (Q high)"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The improving cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of improving cards in this bucket.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// The outs for a player's hand given the visible cards.
#[derive(Debug, Clone, Serialize)]
pub struct Outs {
    current: Option<HandValue>,
    buckets: Vec<OutsBucket>,
    unseen: usize,
    cards_to_come: usize,
}

impl Outs {
    /// Enumerates the outs for two hole cards and 0 to 4 community cards.
    ///
    /// Each unseen deck card is added to the visible cards and the result is
    /// classified: a card whose hand category strictly exceeds the current
    /// one joins the bucket of the hand it completes. With fewer than five
    /// visible cards the baseline is high card and there is no current hand.
    ///
    /// Fails with [EvalError::BoardComplete] when the board already has five
    /// cards, and with [EvalError::DuplicateCard] on duplicate input.
    pub fn find(hole: &[Card; 2], community: &[Card]) -> Result<Outs, EvalError> {
        if community.len() > 4 {
            return Err(EvalError::BoardComplete);
        }

        let mut visible = Vec::with_capacity(2 + community.len());
        visible.extend_from_slice(hole);
        visible.extend_from_slice(community);
        eval::check_duplicates(&visible)?;

        let current = if visible.len() >= 5 {
            Some(HandValue::eval(&visible)?)
        } else {
            None
        };
        let baseline = current
            .as_ref()
            .map(|hv| hv.rank())
            .unwrap_or(HandRank::HighCard);

        let mut deck = Deck::default();
        for card in &visible {
            deck.remove(*card);
        }
        let unseen = deck.count();

        let mut buckets: Vec<OutsBucket> = Vec::new();
        let mut index: AHashMap<String, usize> = AHashMap::default();
        let mut pool = visible.clone();

        for card in deck {
            pool.push(card);
            if pool.len() >= 5 {
                let value = HandValue::eval(&pool)?;
                if value.rank() > baseline {
                    let label = value.label();
                    let idx = match index.get(&label) {
                        Some(&idx) => idx,
                        None => {
                            buckets.push(OutsBucket {
                                rank: value.rank(),
                                label: label.clone(),
                                cards: Vec::new(),
                            });
                            index.insert(label, buckets.len() - 1);
                            buckets.len() - 1
                        }
                    };
                    buckets[idx].cards.push(card);
                }
            }
            pool.pop();
        }

        Ok(Outs {
            current,
            buckets,
            unseen,
            cards_to_come: 5 - community.len(),
        })
    }

    /// The current hand, `None` with fewer than five visible cards.
    pub fn current(&self) -> Option<&HandValue> {
        self.current.as_ref()
    }

    /// The buckets in first-seen deck order.
    pub fn buckets(&self) -> &[OutsBucket] {
        &self.buckets
    }

    /// The buckets sorted by hand strength, strongest first.
    pub fn buckets_by_rank(&self) -> Vec<&OutsBucket> {
        let mut sorted = self.buckets.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.rank.cmp(&a.rank).then(b.count().cmp(&a.count())));
        sorted
    }

    /// The buckets sorted by number of outs, most likely first.
    pub fn buckets_by_count(&self) -> Vec<&OutsBucket> {
        let mut sorted = self.buckets.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.count().cmp(&a.count()));
        sorted
    }

    /// Total number of outs.
    ///
    /// Every improving card lands in exactly one bucket so the union of the
    /// buckets equals the sum of their counts.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.cards.len()).sum()
    }

    /// Number of unseen cards left in the deck.
    pub fn unseen(&self) -> usize {
        self.unseen
    }

    /// Number of community cards still to come.
    pub fn cards_to_come(&self) -> usize {
        self.cards_to_come
    }

    /// The chance that a single next card lands in the given bucket.
    pub fn bucket_probability(&self, bucket: &OutsBucket) -> f64 {
        bucket.count() as f64 / self.unseen as f64
    }

    /// The chance that at least one of the cards to come is an out.
    ///
    /// With one card to come this is outs over unseen; with more it is the
    /// complement of drawing no out on every card, assuming the outs set
    /// stays fixed as cards fall.
    pub fn probability(&self) -> f64 {
        let outs = self.total() as f64;
        let unseen = self.unseen as f64;

        let mut miss = 1.0;
        for drawn in 0..self.cards_to_come {
            let drawn = drawn as f64;
            miss *= (unseen - outs - drawn) / (unseen - drawn);
        }

        1.0 - miss
    }

    /// The odds against improving expressed as "N-to-1", `None` when there
    /// are no outs.
    pub fn odds_to_one(&self) -> Option<f64> {
        let p = self.probability();
        (p > 0.0).then(|| 1.0 / p - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flopside_cards::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn royal_draw_outs() {
        // AS KS on QS JS 2H: the TS completes a royal flush.
        let hole = [card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Spades)];
        let community = [
            card(Rank::Queen, Suit::Spades),
            card(Rank::Jack, Suit::Spades),
            card(Rank::Deuce, Suit::Hearts),
        ];

        let outs = Outs::find(&hole, &community).unwrap();
        assert_eq!(outs.unseen(), 47);
        assert_eq!(outs.cards_to_come(), 2);
        assert_eq!(outs.current().unwrap().rank(), HandRank::HighCard);

        let ten_of_spades = card(Rank::Ten, Suit::Spades);
        let bucket = outs
            .buckets()
            .iter()
            .find(|b| b.cards().contains(&ten_of_spades))
            .expect("TS is an out");
        assert!(bucket.rank() >= HandRank::Straight);
        assert_eq!(bucket.rank(), HandRank::RoyalFlush);

        // Flush draw: nine spades left beside the TS, straight draw: the
        // three off-suit tens.
        let flush: usize = outs
            .buckets()
            .iter()
            .filter(|b| b.rank() == HandRank::Flush)
            .map(|b| b.count())
            .sum();
        assert_eq!(flush, 8);

        let straights: usize = outs
            .buckets()
            .iter()
            .filter(|b| b.rank() == HandRank::Straight)
            .map(|b| b.count())
            .sum();
        assert_eq!(straights, 3);

        assert!(outs.total() <= 47);
    }

    #[test]
    fn bucket_carries_rank_and_label() {
        let hole = [card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Hearts)];
        let community = [
            card(Rank::King, Suit::Diamonds),
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Deuce, Suit::Hearts),
        ];

        let outs = Outs::find(&hole, &community).unwrap();
        assert_eq!(outs.current().unwrap().rank(), HandRank::OnePair);

        // The two remaining aces make trips, the kings, sevens and deuces
        // make two pair.
        let trips = outs
            .buckets()
            .iter()
            .find(|b| b.rank() == HandRank::ThreeOfAKind)
            .unwrap();
        assert_eq!(trips.label(), "Three of a Kind (As)");
        assert_eq!(trips.count(), 2);

        let two_pair: usize = outs
            .buckets()
            .iter()
            .filter(|b| b.rank() == HandRank::TwoPair)
            .map(|b| b.count())
            .sum();
        assert_eq!(two_pair, 9);

        assert_eq!(outs.total(), 11);
    }

    #[test]
    fn buckets_sorted_views() {
        let hole = [card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Spades)];
        let community = [
            card(Rank::Queen, Suit::Spades),
            card(Rank::Jack, Suit::Spades),
            card(Rank::Deuce, Suit::Hearts),
        ];

        let outs = Outs::find(&hole, &community).unwrap();

        let by_rank = outs.buckets_by_rank();
        assert!(by_rank.windows(2).all(|w| w[0].rank() >= w[1].rank()));
        assert_eq!(by_rank[0].rank(), HandRank::RoyalFlush);

        let by_count = outs.buckets_by_count();
        assert!(by_count.windows(2).all(|w| w[0].count() >= w[1].count()));
    }

    #[test]
    fn probabilities() {
        let hole = [card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Hearts)];
        let community = [
            card(Rank::King, Suit::Diamonds),
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Deuce, Suit::Hearts),
            card(Rank::Trey, Suit::Spades),
        ];

        // One card to come.
        let outs = Outs::find(&hole, &community).unwrap();
        assert_eq!(outs.cards_to_come(), 1);
        assert_eq!(outs.unseen(), 46);
        let expected = outs.total() as f64 / 46.0;
        assert!((outs.probability() - expected).abs() < 1e-12);

        // Two cards to come.
        let outs = Outs::find(&hole, &community[..3]).unwrap();
        assert_eq!(outs.cards_to_come(), 2);
        let (u, t) = (outs.unseen() as f64, outs.total() as f64);
        let expected = 1.0 - ((u - t) / u) * ((u - t - 1.0) / (u - 1.0));
        assert!((outs.probability() - expected).abs() < 1e-12);

        let odds = outs.odds_to_one().unwrap();
        assert!((odds - (1.0 / outs.probability() - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn preflop_has_no_current_hand() {
        let hole = [card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Spades)];
        let outs = Outs::find(&hole, &[]).unwrap();
        assert!(outs.current().is_none());
        assert_eq!(outs.unseen(), 50);
        assert_eq!(outs.cards_to_come(), 5);
        // Three cards visible after the candidate, no hand to classify.
        assert!(outs.buckets().is_empty());
        assert_eq!(outs.probability(), 0.0);
        assert!(outs.odds_to_one().is_none());
    }

    #[test]
    fn two_visible_plus_candidate_classifies() {
        // Two community cards: each candidate makes a five cards hand.
        let hole = [card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Hearts)];
        let community = [card(Rank::King, Suit::Diamonds), card(Rank::Seven, Suit::Clubs)];

        let outs = Outs::find(&hole, &community).unwrap();
        assert!(outs.current().is_none());
        assert_eq!(outs.unseen(), 48);

        // Any pair beats the high card baseline, the two aces make trips.
        let trips = outs
            .buckets()
            .iter()
            .find(|b| b.rank() == HandRank::ThreeOfAKind)
            .unwrap();
        assert_eq!(trips.count(), 2);
    }

    #[test]
    fn find_errors() {
        let hole = [card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Spades)];
        let full_board = [
            card(Rank::Queen, Suit::Spades),
            card(Rank::Jack, Suit::Spades),
            card(Rank::Deuce, Suit::Hearts),
            card(Rank::Trey, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
        ];
        let err = Outs::find(&hole, &full_board).unwrap_err();
        assert_eq!(err, EvalError::BoardComplete);

        let dup = [
            card(Rank::Ace, Suit::Spades),
            card(Rank::Jack, Suit::Spades),
            card(Rank::Deuce, Suit::Hearts),
        ];
        let err = Outs::find(&hole, &dup).unwrap_err();
        assert_eq!(
            err,
            EvalError::DuplicateCard(card(Rank::Ace, Suit::Spades))
        );
    }
}
