//! Tile identity, visibility, and per-challenger guess history.
//!
//! A tile's identity is its (color, number) pair; the full deck holds one
//! tile per pair. Visibility is monotonic: `reveal` flips Private to Public
//! and nothing ever flips it back. Each tile also owns its guess history -
//! which numbers each challenger has already tried against it. One guess per
//! number per tile per challenger is a gameplay rule, not bookkeeping, so it
//! lives on the tile where it can be tested in isolation.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};

/// Tile color. Every number exists once in each color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, in sort-key order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Sort-key contribution: Black sorts before White on equal numbers.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Whether a tile's number is visible to everyone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Number known only to the owner.
    Private,
    /// Number revealed to the whole table.
    Public,
}

impl Visibility {
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// One tile: immutable identity, monotonic visibility, guess history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    color: Color,
    number: u8,
    visibility: Visibility,
    /// Numbers each challenger has already tried against this tile.
    guessed_by: PlayerMap<ImHashSet<u8>>,
}

impl Tile {
    /// Create a private tile.
    ///
    /// `player_count` sizes the guess-history map; the deck builds every
    /// tile for a concrete table.
    #[must_use]
    pub fn new(color: Color, number: u8, player_count: usize) -> Self {
        Self {
            color,
            number,
            visibility: Visibility::Private,
            guessed_by: PlayerMap::new(player_count, |_| ImHashSet::new()),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Ordering key for the hand's sorted view.
    ///
    /// Tiles order by number, Black before White within a number.
    #[must_use]
    pub fn sort_key(&self) -> u16 {
        u16::from(self.number) * 2 + self.color.index() as u16
    }

    /// Turn the tile face up. Irreversible.
    pub(crate) fn reveal(&mut self) {
        self.visibility = Visibility::Public;
    }

    /// Record a wrong guess so `guesser` cannot repeat it.
    pub(crate) fn record_guess(&mut self, guesser: PlayerId, number: u8) {
        self.guessed_by[guesser].insert(number);
    }

    /// Has `guesser` already tried `number` against this tile?
    #[must_use]
    pub fn was_guessed(&self, guesser: PlayerId, number: u8) -> bool {
        self.guessed_by[guesser].contains(&number)
    }

    /// Numbers `guesser` has already tried against this tile.
    pub fn guesses_by(&self, guesser: PlayerId) -> impl Iterator<Item = u8> + '_ {
        self.guessed_by[guesser].iter().copied()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let face = if self.is_public() { "face up" } else { "face down" };
        write!(f, "{} {} ({})", self.color, self.number, face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_private() {
        let tile = Tile::new(Color::Black, 7, 3);
        assert_eq!(tile.color(), Color::Black);
        assert_eq!(tile.number(), 7);
        assert!(!tile.is_public());
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut tile = Tile::new(Color::White, 3, 2);
        tile.reveal();
        assert!(tile.is_public());

        // A second reveal changes nothing
        tile.reveal();
        assert!(tile.is_public());
    }

    #[test]
    fn test_sort_key_orders_number_then_color() {
        let black_5 = Tile::new(Color::Black, 5, 2);
        let white_5 = Tile::new(Color::White, 5, 2);
        let black_6 = Tile::new(Color::Black, 6, 2);

        assert!(black_5.sort_key() < white_5.sort_key());
        assert!(white_5.sort_key() < black_6.sort_key());
    }

    #[test]
    fn test_guess_history_is_per_challenger() {
        let mut tile = Tile::new(Color::Black, 9, 3);
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        tile.record_guess(p1, 4);

        assert!(tile.was_guessed(p1, 4));
        assert!(!tile.was_guessed(p1, 5));
        assert!(!tile.was_guessed(p2, 4));
    }

    #[test]
    fn test_guesses_by_lists_recorded_numbers() {
        let mut tile = Tile::new(Color::White, 2, 2);
        let p0 = PlayerId::new(0);

        tile.record_guess(p0, 1);
        tile.record_guess(p0, 3);
        tile.record_guess(p0, 3);

        let mut guesses: Vec<u8> = tile.guesses_by(p0).collect();
        guesses.sort_unstable();
        assert_eq!(guesses, vec![1, 3]);
    }

    #[test]
    fn test_display() {
        let mut tile = Tile::new(Color::Black, 11, 2);
        assert_eq!(tile.to_string(), "Black 11 (face down)");
        tile.reveal();
        assert_eq!(tile.to_string(), "Black 11 (face up)");
    }

    #[test]
    fn test_tile_serde_round_trip() {
        let mut tile = Tile::new(Color::White, 6, 3);
        tile.record_guess(PlayerId::new(0), 2);

        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
