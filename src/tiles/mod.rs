//! Tile, deck, and hand data model.
//!
//! ## Key Types
//!
//! - `Tile`: immutable (color, number) identity, monotonic visibility,
//!   per-challenger guess history
//! - `Deck`: the shrinking pool of undrawn tiles
//! - `Hand`: one player's tiles in deterministic sorted order, plus the
//!   optional just-drawn pending tile

pub mod deck;
pub mod hand;
pub mod tile;

pub use deck::Deck;
pub use hand::Hand;
pub use tile::{Color, Tile, Visibility};
