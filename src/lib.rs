//! # davinci-engine
//!
//! A game engine for the deduction board game Da Vinci Code: players hold
//! numbered, colored tiles that start private; each turn a player draws a
//! tile, then guesses the hidden numbers on opponents' tiles - continuing
//! on correct guesses, forfeiting the drawn tile face up on a wrong one -
//! until only one player retains a private tile.
//!
//! ## Design Principles
//!
//! 1. **Context-Passing**: Every game lives in one `GameHost` value; no
//!    globals, so any number of games can run side by side.
//!
//! 2. **Deterministic**: All randomness flows through a caller-supplied
//!    seeded `GameRng`. Same seed + same actions = same game.
//!
//! 3. **Closed Errors**: Every failure is one kind of `GameError`, so a UI
//!    can render a precise message and an RL wrapper can map each kind to a
//!    distinct penalty.
//!
//! 4. **Visible-To-Whom Is Explicit**: The host is omniscient;
//!    `observable_state` is the only projection a per-player consumer
//!    should read, and `compute_mask` enumerates exactly the guesses the
//!    resolver would accept.
//!
//! ## Modules
//!
//! - `core`: player ids, deterministic RNG, errors, configuration
//! - `tiles`: tile identity/visibility/guess-history, deck, hand
//! - `engine`: guess resolution and the turn-sequencing game host
//! - `actions`: legal-action mask for UIs and automated policies
//! - `view`: per-viewer observation projection

pub mod actions;
pub mod core;
pub mod engine;
pub mod tiles;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    EngineResult, GameConfig, GameError, GameRng, GameRngState, PlayerId, PlayerMap,
};

pub use crate::tiles::{Color, Deck, Hand, Tile, Visibility};

pub use crate::engine::{GameHost, GamePhase, GameResult, GuessOutcome};

pub use crate::actions::{ActionMask, GuessAction};

pub use crate::view::{Observation, PendingView, PlayerView, TileView};
