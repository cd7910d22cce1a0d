//! Legal-action enumeration.
//!
//! The mask is a pure projection of the current hands and guess histories:
//! every (target, tile index, number) triple the resolver would accept for
//! a given viewer, nothing more. It holds no state of its own and can be
//! recomputed at any time. A UI renders the triples as a choice list; an
//! RL policy uses `is_legal` as its legal-move filter.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::engine::host::GameHost;

/// One legal guess: which player's tile, at which sorted-view index, with
/// which number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessAction {
    /// The player being guessed against.
    pub target: PlayerId,
    /// Index into the target's sorted view.
    pub tile_index: usize,
    /// The guessed number.
    pub number: u8,
}

/// Every guess currently legal for one viewer.
///
/// Triples are enumerated in a deterministic order: target id, then tile
/// index, then number ascending.
#[derive(Clone, Debug, Default)]
pub struct ActionMask {
    actions: Vec<GuessAction>,
    index: FxHashSet<GuessAction>,
}

impl ActionMask {
    /// Enumerate every legal guess for `viewer` against the current hands.
    ///
    /// A triple is included iff the target is another non-eliminated
    /// player, the tile at that index is private, the number is in range,
    /// and `viewer` has not already tried that number against that tile.
    #[must_use]
    pub fn compute(host: &GameHost, viewer: PlayerId) -> Self {
        let config = host.config();
        let mut actions = Vec::new();

        for target in PlayerId::all(config.num_players) {
            if target == viewer {
                continue;
            }
            let hand = host.hand(target);
            if hand.is_eliminated() {
                continue;
            }
            for (tile_index, tile) in hand.sorted_view().iter().enumerate() {
                if tile.is_public() {
                    continue;
                }
                for number in 1..=config.max_tile_number {
                    if tile.was_guessed(viewer, number) {
                        continue;
                    }
                    actions.push(GuessAction { target, tile_index, number });
                }
            }
        }

        let index = actions.iter().copied().collect();
        Self { actions, index }
    }

    /// O(1) legality check for one triple.
    #[must_use]
    pub fn is_legal(&self, action: &GuessAction) -> bool {
        self.index.contains(action)
    }

    /// The legal triples in enumeration order.
    #[must_use]
    pub fn actions(&self) -> &[GuessAction] {
        &self.actions
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuessAction> {
        self.actions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
