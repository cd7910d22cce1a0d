//! The pool of undrawn tiles.
//!
//! A fresh deck holds one tile per (color, number) pair - `2 * N` tiles for
//! numbers `1..=N`. Draws remove a uniformly random tile through the
//! caller-supplied `GameRng`; nothing is ever returned to the deck, so it
//! only shrinks. The backing store is an explicit `Vec` so no behavior can
//! depend on incidental iteration order.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineResult, GameError};
use crate::core::rng::GameRng;

use super::tile::{Color, Tile};

/// The undrawn-tile pool.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a full deck: both colors of every number in `1..=max_tile_number`.
    ///
    /// `player_count` sizes the per-tile guess-history maps.
    #[must_use]
    pub fn full(max_tile_number: u8, player_count: usize) -> Self {
        let mut tiles = Vec::with_capacity(2 * max_tile_number as usize);
        for color in Color::ALL {
            for number in 1..=max_tile_number {
                tiles.push(Tile::new(color, number, player_count));
            }
        }
        Self { tiles }
    }

    /// Number of tiles remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remove and return a uniformly random tile.
    ///
    /// Fails with `EmptyDeck` when no tiles remain; the deck is left
    /// unchanged in that case.
    pub fn draw(&mut self, rng: &mut GameRng) -> EngineResult<Tile> {
        if self.tiles.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let index = rng.gen_range_usize(0..self.tiles.len());
        Ok(self.tiles.swap_remove(index))
    }
}
