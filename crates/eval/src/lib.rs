// Copyright (C) 2026 Flopside developers.
// SPDX-License-Identifier: Apache-2.0

//! Flopside poker hand evaluator.
//!
//! Hand classification, best-hand selection, outs enumeration, and showdown
//! resolution for standard 52-card Texas Hold'em.
//!
//! To evaluate a hand create the cards and use [HandValue]:
//!
//! ```
//! # use flopside_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! ```
//!
//! [HandValue::eval_best] picks the best five cards out of a 5 to 7 cards
//! hand, [Outs::find] enumerates the unseen cards that improve a hand, and
//! [showdown::resolve] ranks players' hands on a shared board.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

mod error;
pub use error::EvalError;

pub mod outs;
pub use outs::{Outs, OutsBucket};

pub mod showdown;
pub use showdown::{Player, PlayerResult};

// Reexport cards types.
pub use flopside_cards::{Card, Deck, Rank, Suit};
