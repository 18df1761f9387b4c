// Copyright (C) 2026 Flopside developers.
// SPDX-License-Identifier: Apache-2.0

//! Showdown resolution.
//!
//! Ranks players' best hands on a shared board. Every player gets the best
//! five cards out of their hole cards plus the community cards, results come
//! back strongest first with competition places, so a split pot reports all
//! the tied players at place 1.
use serde::{Deserialize, Serialize};

use flopside_cards::Card;

use crate::error::EvalError;
use crate::eval::{self, HandValue};

/// A player at the showdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// The player identifier.
    pub id: u32,
    /// The player display name.
    pub name: String,
    /// The player's two hole cards.
    pub hole: [Card; 2],
}

/// A player's showdown result.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerResult {
    player: Player,
    hand: HandValue,
    place: usize,
}

impl PlayerResult {
    /// The player this result belongs to.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The player's best hand.
    pub fn hand(&self) -> &HandValue {
        &self.hand
    }

    /// The 1-based place, tied players share the same place.
    pub fn place(&self) -> usize {
        self.place
    }

    /// Whether this player takes (a share of) the pot.
    pub fn is_winner(&self) -> bool {
        self.place == 1
    }
}

/// Resolves a showdown between two or more players.
///
/// Needs at least 2 players and 3 to 5 community cards; with fewer than five
/// community cards the best hand is picked from the smaller pool, a what-if
/// board. All cards across hole and community must be distinct.
///
/// Returns the results strongest hand first. Places follow competition
/// ranking: players whose hands tie on both category and tie-break ranks
/// share a place, and the next distinct hand skips the tied count.
pub fn resolve(players: &[Player], community: &[Card]) -> Result<Vec<PlayerResult>, EvalError> {
    if players.len() < 2 {
        return Err(EvalError::NotEnoughPlayers { got: players.len() });
    }
    if !(3..=5).contains(&community.len()) {
        return Err(EvalError::BoardSize {
            got: community.len(),
        });
    }

    let mut all = community.to_vec();
    for player in players {
        all.extend_from_slice(&player.hole);
    }
    eval::check_duplicates(&all)?;

    let mut results = players
        .iter()
        .map(|player| {
            let mut pool = player.hole.to_vec();
            pool.extend_from_slice(community);
            let hand = HandValue::eval_best(&pool)?;
            Ok(PlayerResult {
                player: player.clone(),
                hand,
                place: 0,
            })
        })
        .collect::<Result<Vec<_>, EvalError>>()?;

    // Strongest first, stable so equal hands keep the players order.
    results.sort_by(|a, b| b.hand.cmp(&a.hand));

    for i in 0..results.len() {
        results[i].place = if i > 0 && results[i].hand == results[i - 1].hand {
            results[i - 1].place
        } else {
            i + 1
        };
    }

    Ok(results)
}
