//! Game configuration.
//!
//! A `GameConfig` fixes the shape of one game: how many players, how many
//! tiles each starts with, and the highest tile number. The full deck is
//! always two colors of each number, `2 * max_tile_number` tiles total.

use serde::{Deserialize, Serialize};

use super::error::{EngineResult, GameError};
use super::player::PlayerId;

/// Configuration for a single game.
///
/// ## Example
///
/// ```
/// use davinci_engine::{GameConfig, PlayerId};
///
/// let config = GameConfig::new(3, 4, 12).with_starting_player(PlayerId::new(1));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.deck_size(), 24);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players.
    pub num_players: usize,

    /// Tiles dealt to each player before the first turn.
    pub initial_tiles: usize,

    /// Highest tile number; tiles carry numbers in `1..=max_tile_number`.
    pub max_tile_number: u8,

    /// Player who takes the first turn.
    pub starting_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        // Standard Da Vinci Code setup: 3 players, 4 tiles each, numbers 1-12.
        Self {
            num_players: 3,
            initial_tiles: 4,
            max_tile_number: 12,
            starting_player: PlayerId::new(0),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given table shape.
    #[must_use]
    pub fn new(num_players: usize, initial_tiles: usize, max_tile_number: u8) -> Self {
        Self {
            num_players,
            initial_tiles,
            max_tile_number,
            starting_player: PlayerId::new(0),
        }
    }

    /// Set the player who takes the first turn.
    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }

    /// Total tiles in a fresh deck: one of each number per color.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        2 * self.max_tile_number as usize
    }

    /// Check the configuration against the deal.
    ///
    /// The initial deal must leave a playable game: at least two players,
    /// at least one tile each, and no more tiles dealt than the deck holds.
    pub fn validate(&self) -> EngineResult<()> {
        if self.num_players < 2 {
            return Err(GameError::Config("at least two players are required"));
        }
        if self.num_players > 255 {
            return Err(GameError::Config("at most 255 players are supported"));
        }
        if self.initial_tiles == 0 {
            return Err(GameError::Config("each player must start with at least one tile"));
        }
        if self.max_tile_number == 0 {
            return Err(GameError::Config("max_tile_number must be positive"));
        }
        if self.num_players * self.initial_tiles > self.deck_size() {
            return Err(GameError::Config("initial deal exceeds the deck size"));
        }
        if self.starting_player.index() >= self.num_players {
            return Err(GameError::Config("starting player index out of range"));
        }
        Ok(())
    }
}
