//! Core engine types: players, RNG, errors, configuration.
//!
//! This module contains the fundamental building blocks shared by every
//! other part of the engine.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use error::{EngineResult, GameError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
