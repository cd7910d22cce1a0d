//! Per-viewer projection of the game state.
//!
//! The host itself is omniscient; this module is where information hiding
//! happens. An `Observation` exposes, for each player: the viewer's own
//! tiles with true numbers, other players' public tiles with true numbers,
//! other players' private tiles with the number withheld, and pending
//! tiles as full detail for the viewer's own, existence only for anyone
//! else's. External encoders (a GUI's asset picker, an RL wrapper's tensor
//! layout) build on this projection; they are not part of the engine.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::engine::host::GameHost;
use crate::tiles::tile::{Color, Tile, Visibility};

/// One tile as a given viewer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub color: Color,
    pub visibility: Visibility,
    /// The number, when the viewer is entitled to it.
    pub number: Option<u8>,
}

impl TileView {
    fn of(tile: &Tile, reveal_number: bool) -> Self {
        Self {
            color: tile.color(),
            visibility: tile.visibility(),
            number: if reveal_number { Some(tile.number()) } else { None },
        }
    }
}

/// A pending (drawn, uncommitted) tile as a given viewer sees it.
///
/// A pending tile is never public, so other players learn nothing beyond
/// its existence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingView {
    /// No tile is pending.
    Absent,
    /// Another player holds a pending tile; all detail withheld.
    Hidden,
    /// The viewer's own pending tile.
    Visible(TileView),
}

/// One player's hand as a given viewer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player: PlayerId,
    /// Tiles in the hand's sorted order; indices here are the indices
    /// `guess` and the action mask use.
    pub tiles: Vec<TileView>,
    pub pending: PendingView,
    pub eliminated: bool,
}

/// Everything one viewer may know about the current state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub viewer: PlayerId,
    /// One view per player, in player-id order.
    pub players: Vec<PlayerView>,
}

impl Observation {
    /// Project the host's state for `viewer`.
    #[must_use]
    pub fn capture(host: &GameHost, viewer: PlayerId) -> Self {
        let players = PlayerId::all(host.config().num_players)
            .map(|player| {
                let hand = host.hand(player);
                let own = player == viewer;

                let tiles = hand
                    .sorted_view()
                    .iter()
                    .map(|tile| TileView::of(tile, own || tile.is_public()))
                    .collect();

                let pending = match hand.pending() {
                    None => PendingView::Absent,
                    Some(tile) if own => PendingView::Visible(TileView::of(tile, true)),
                    Some(_) => PendingView::Hidden,
                };

                PlayerView { player, tiles, pending, eliminated: hand.is_eliminated() }
            })
            .collect();

        Self { viewer, players }
    }
}
