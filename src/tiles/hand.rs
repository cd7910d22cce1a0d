//! One player's tiles.
//!
//! The owned tiles are kept permanently sorted by `Tile::sort_key`, so the
//! sorted view is the storage itself and every tile index exposed to a
//! caller is deterministic. A just-drawn tile sits in `pending` until the
//! turn resolves: committed (stays private) on an explicit end of turn,
//! forfeited (revealed) on a wrong guess.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::EngineResult;
use crate::core::rng::GameRng;

use super::deck::Deck;
use super::tile::Tile;

/// One player's owned tiles plus the optional just-drawn tile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// Owned tiles, always sorted by `Tile::sort_key`.
    tiles: SmallVec<[Tile; 8]>,
    /// Drawn this turn, not yet committed or forfeited.
    pending: Option<Tile>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the hand, pending tile included. Used at game (re)initialization.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.pending = None;
    }

    /// The owned tiles in their deterministic order.
    ///
    /// This ordering is the only tile indexing scheme the engine exposes:
    /// every `tile_index` argument refers to a position in this slice.
    #[must_use]
    pub fn sorted_view(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of owned tiles (pending excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of owned tiles still face down.
    #[must_use]
    pub fn private_tiles(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_public()).count()
    }

    /// The just-drawn tile, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Tile> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Draw one tile from `deck`.
    ///
    /// A direct draw (initial deal) goes straight into the owned tiles;
    /// otherwise the tile becomes pending. Propagates `EmptyDeck`.
    pub fn draw(&mut self, deck: &mut Deck, rng: &mut GameRng, direct_draw: bool) -> EngineResult<()> {
        let tile = deck.draw(rng)?;
        if direct_draw {
            self.insert(tile);
        } else {
            debug_assert!(self.pending.is_none(), "drawing over a pending tile loses it");
            self.pending = Some(tile);
        }
        Ok(())
    }

    /// Merge the pending tile into the owned tiles, still face down.
    ///
    /// A pending tile is private by construction, so this is the idempotent
    /// keep-it-private flip. No-op without a pending tile.
    pub fn commit_pending(&mut self) {
        if let Some(tile) = self.pending.take() {
            self.insert(tile);
        }
    }

    /// Reveal the pending tile and merge it into the owned tiles.
    ///
    /// The price of a wrong guess. No-op without a pending tile.
    pub fn forfeit_pending(&mut self) {
        if let Some(mut tile) = self.pending.take() {
            tile.reveal();
            self.insert(tile);
        }
    }

    /// A player is out once no owned tile is private.
    ///
    /// The pending tile never counts: nobody is eliminated over an
    /// uncommitted draw.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        !self.tiles.iter().any(|t| !t.is_public())
    }

    /// Insert into the sorted position.
    pub(crate) fn insert(&mut self, tile: Tile) {
        let position = self.tiles.partition_point(|t| t.sort_key() < tile.sort_key());
        self.tiles.insert(position, tile);
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::tile::Color;

    fn tile(color: Color, number: u8) -> Tile {
        Tile::new(color, number, 2)
    }

    #[test]
    fn test_insert_keeps_sorted_order() {
        let mut hand = Hand::new();
        hand.insert(tile(Color::White, 5));
        hand.insert(tile(Color::Black, 9));
        hand.insert(tile(Color::Black, 5));
        hand.insert(tile(Color::White, 1));

        let keys: Vec<u16> = hand.sorted_view().iter().map(Tile::sort_key).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);

        // Black 5 sorts immediately before White 5
        assert_eq!(hand.sorted_view()[1].color(), Color::Black);
        assert_eq!(hand.sorted_view()[2].color(), Color::White);
    }

    #[test]
    fn test_draw_direct_goes_to_tiles() {
        let mut hand = Hand::new();
        let mut deck = Deck::full(3, 2);
        let mut rng = GameRng::new(42);

        hand.draw(&mut deck, &mut rng, true).unwrap();

        assert_eq!(hand.len(), 1);
        assert!(!hand.has_pending());
        assert_eq!(deck.len(), 5);
    }

    #[test]
    fn test_draw_pending_stays_out_of_tiles() {
        let mut hand = Hand::new();
        let mut deck = Deck::full(3, 2);
        let mut rng = GameRng::new(42);

        hand.draw(&mut deck, &mut rng, false).unwrap();

        assert_eq!(hand.len(), 0);
        assert!(hand.has_pending());
        assert!(!hand.pending().unwrap().is_public());
    }

    #[test]
    fn test_commit_pending_keeps_tile_private() {
        let mut hand = Hand::new();
        let mut deck = Deck::full(3, 2);
        let mut rng = GameRng::new(42);

        hand.draw(&mut deck, &mut rng, false).unwrap();
        hand.commit_pending();

        assert_eq!(hand.len(), 1);
        assert!(!hand.has_pending());
        assert!(!hand.sorted_view()[0].is_public());

        // Idempotent: a second commit is a no-op
        hand.commit_pending();
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_forfeit_pending_reveals_tile() {
        let mut hand = Hand::new();
        let mut deck = Deck::full(3, 2);
        let mut rng = GameRng::new(42);

        hand.draw(&mut deck, &mut rng, false).unwrap();
        hand.forfeit_pending();

        assert_eq!(hand.len(), 1);
        assert!(!hand.has_pending());
        assert!(hand.sorted_view()[0].is_public());
    }

    #[test]
    fn test_elimination_ignores_pending() {
        let mut hand = Hand::new();

        // Empty hand counts as eliminated
        assert!(hand.is_eliminated());

        let mut revealed = tile(Color::Black, 2);
        revealed.reveal();
        hand.insert(revealed);
        assert!(hand.is_eliminated());

        // A pending tile does not save the player
        let mut deck = Deck::full(3, 2);
        let mut rng = GameRng::new(42);
        hand.draw(&mut deck, &mut rng, false).unwrap();
        assert!(hand.is_eliminated());

        hand.insert(tile(Color::White, 3));
        assert!(!hand.is_eliminated());
    }

    #[test]
    fn test_private_tiles_counts_face_down_only() {
        let mut hand = Hand::new();
        hand.insert(tile(Color::Black, 1));
        let mut revealed = tile(Color::White, 2);
        revealed.reveal();
        hand.insert(revealed);

        assert_eq!(hand.len(), 2);
        assert_eq!(hand.private_tiles(), 1);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut hand = Hand::new();
        let mut deck = Deck::full(3, 2);
        let mut rng = GameRng::new(42);

        hand.draw(&mut deck, &mut rng, true).unwrap();
        hand.draw(&mut deck, &mut rng, false).unwrap();
        hand.clear();

        assert!(hand.is_empty());
        assert!(!hand.has_pending());
    }
}
