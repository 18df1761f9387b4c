// Copyright (C) 2026 Flopside developers.
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use flopside_cards::Card;

/// Errors returned for malformed evaluation inputs.
///
/// All variants are recoverable validation failures, the evaluator never
/// panics on caller input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Fewer cards than the operation needs.
    #[error("not enough cards: got {got}, need at least {need}")]
    NotEnoughCards {
        /// Number of cards received.
        got: usize,
        /// Minimum number of cards required.
        need: usize,
    },
    /// The same card appears more than once in the combined input.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// The board already has five cards, there is no card to come.
    #[error("board is complete, no cards to come")]
    BoardComplete,
    /// A showdown needs at least two players with hole cards.
    #[error("not enough players: got {got}, need at least 2")]
    NotEnoughPlayers {
        /// Number of players received.
        got: usize,
    },
    /// A showdown board must have 3 to 5 community cards.
    #[error("invalid board size: got {got}, need 3 to 5 cards")]
    BoardSize {
        /// Number of community cards received.
        got: usize,
    },
}
