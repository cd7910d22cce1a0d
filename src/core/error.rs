//! The closed error taxonomy of the engine.
//!
//! Every failure a caller can provoke is one of the kinds below, so call
//! sites can match exhaustively: a UI renders a precise message from the
//! `Display` impl, an RL wrapper maps variants to distinct penalties.
//!
//! All kinds are caller-recoverable. The seven invalid-guess kinds and
//! `EmptyDeck` leave the game state unchanged; nothing is ever swallowed
//! inside the engine.

use thiserror::Error;

use super::player::PlayerId;

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, GameError>;

/// Everything that can go wrong inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Bad constructor parameters. Fatal to that `init` call only.
    #[error("invalid game configuration: {0}")]
    Config(&'static str),

    /// The deck has no tiles left. Expected and frequent near end-of-game.
    #[error("the deck is empty")]
    EmptyDeck,

    /// The guessed target index does not name a player.
    #[error("target index {index} out of range for {player_count} players")]
    TargetIndexOutOfRange { index: usize, player_count: usize },

    /// A player may not guess against their own hand.
    #[error("a player cannot target their own hand")]
    TargetIsSelf,

    /// The targeted player has no private tiles left.
    #[error("{target} is already eliminated")]
    TargetAlreadyEliminated { target: PlayerId },

    /// The guessed number is outside the tile number range.
    #[error("guessed number {number} is outside 1..={max_tile_number}")]
    NumberOutOfRange { number: u8, max_tile_number: u8 },

    /// The tile index does not name a tile in the target's sorted hand.
    #[error("tile index {index} out of range for a hand of {hand_size} tiles")]
    TileIndexOutOfRange { index: usize, hand_size: usize },

    /// The targeted tile is already face up.
    #[error("the tile at index {index} is already public")]
    TileAlreadyPublic { index: usize },

    /// This guesser already tried this number against this exact tile.
    #[error("{guesser} already guessed {number} against this tile")]
    DuplicateGuess { guesser: PlayerId, number: u8 },

    /// The operation is not legal in the current phase of the game.
    #[error("illegal state transition: {reason}")]
    IllegalStateTransition { reason: &'static str },
}
