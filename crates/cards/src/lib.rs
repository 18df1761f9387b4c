// Copyright (C) 2026 Flopside developers.
// SPDX-License-Identifier: Apache-2.0

//! Flopside poker card types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use flopside_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating the 52 cards.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use flopside_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};
