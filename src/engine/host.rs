//! The game host: turn sequencing, dealing, and game-over detection.
//!
//! `GameHost` owns the deck, every hand, and the RNG, and is the only type
//! that mutates them after setup. One host is one game instance; nothing is
//! shared between instances, so any number of games can run side by side.
//!
//! ## Phase machine
//!
//! `Uninitialized -> InProgress -> Finished`. `init` deals and enters
//! `InProgress`; the host flips to `Finished` eagerly inside whichever
//! operation eliminates the second-to-last player, so the phase and
//! `remaining_players` can never disagree. `init` may be called again at
//! any point to start a fresh game on the same instance.
//!
//! ## Turn shape
//!
//! The current player draws (pending, not yet owned), then guesses. A
//! correct guess keeps the turn; the player may guess again or end the
//! turn, which commits the pending tile face down. A wrong guess forfeits
//! the pending tile face up and passes the turn to the next non-eliminated
//! player, who immediately attempts a draw (an empty deck is tolerated -
//! a player may legally hold no pending tile).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::actions::mask::ActionMask;
use crate::core::config::GameConfig;
use crate::core::error::{EngineResult, GameError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::{GameRng, GameRngState};
use crate::tiles::deck::Deck;
use crate::tiles::hand::Hand;
use crate::view::observation::Observation;

use super::resolver::{self, GuessOutcome};

/// Lifecycle of one game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed but not yet dealt.
    Uninitialized,
    /// Dealt and playable.
    InProgress,
    /// At most one player still holds a private tile.
    Finished,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single surviving player.
    Winner(PlayerId),
    /// No survivors. Only reachable in pathological configurations.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// One game of Da Vinci Code.
pub struct GameHost {
    config: GameConfig,
    phase: GamePhase,
    deck: Deck,
    hands: PlayerMap<Hand>,
    current_player: PlayerId,
    /// Whether the current player has attempted a guess this turn.
    /// Ending a turn before any attempt is illegal.
    guess_attempted: bool,
    rng: GameRng,
}

impl GameHost {
    /// Create a host with a caller-supplied RNG.
    ///
    /// Validates the configuration; the game starts `Uninitialized` until
    /// `init` deals the tiles.
    pub fn new(config: GameConfig, rng: GameRng) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            phase: GamePhase::Uninitialized,
            deck: Deck::new(),
            hands: PlayerMap::with_default(config.num_players),
            current_player: config.starting_player,
            guess_attempted: false,
            config,
            rng,
        })
    }

    /// Create a host seeded for reproducible play.
    pub fn with_seed(config: GameConfig, seed: u64) -> EngineResult<Self> {
        Self::new(config, GameRng::new(seed))
    }

    /// Deal a fresh game and enter `InProgress`.
    ///
    /// Builds a full deck, clears every hand, and deals `initial_tiles`
    /// rounds of one direct draw per player in id order.
    pub fn init(&mut self) -> EngineResult<()> {
        self.deck = Deck::full(self.config.max_tile_number, self.config.num_players);
        for (_, hand) in self.hands.iter_mut() {
            hand.clear();
        }

        for _ in 0..self.config.initial_tiles {
            for player in PlayerId::all(self.config.num_players) {
                self.hands[player].draw(&mut self.deck, &mut self.rng, true)?;
            }
        }

        self.current_player = self.config.starting_player;
        self.guess_attempted = false;
        self.phase = GamePhase::InProgress;
        debug!(
            "game initialized: {} players, {} tiles each, numbers 1..={}, {} starts",
            self.config.num_players,
            self.config.initial_tiles,
            self.config.max_tile_number,
            self.current_player,
        );
        Ok(())
    }

    /// Draw a pending tile for the current player.
    ///
    /// Surfaces `EmptyDeck` without changing anything - near the end of a
    /// game a player may legally take no tile. Drawing while a pending
    /// tile is already outstanding is illegal: the outstanding tile would
    /// be lost.
    pub fn draw_for_current_player(&mut self) -> EngineResult<()> {
        self.ensure_in_progress("drawing requires a game in progress")?;
        if self.hands[self.current_player].has_pending() {
            return Err(GameError::IllegalStateTransition {
                reason: "a drawn tile is already pending",
            });
        }
        self.hands[self.current_player].draw(&mut self.deck, &mut self.rng, false)
    }

    /// The current player guesses `number` on the target's tile at
    /// `tile_index` in the target's sorted view.
    ///
    /// On `Correct` the turn stays with the guesser. On `Incorrect` the
    /// turn passes to the next non-eliminated player, who immediately
    /// attempts a draw. Validation errors leave all game state unchanged
    /// and the turn in place, so the caller can retry with corrected input.
    pub fn guess(
        &mut self,
        target_index: usize,
        tile_index: usize,
        number: u8,
    ) -> EngineResult<GuessOutcome> {
        self.ensure_in_progress("guessing requires a game in progress")?;

        // Any attempt, valid or not, satisfies the turn's guess obligation;
        // a wrapper that penalizes invalid actions can then end the turn.
        self.guess_attempted = true;

        let outcome = resolver::resolve(
            &mut self.hands,
            self.current_player,
            target_index,
            tile_index,
            number,
            self.config.max_tile_number,
        )?;

        // A correct guess can eliminate the target; a wrong one can
        // eliminate the guesser through the forfeited pending tile.
        self.refresh_phase();
        if outcome == GuessOutcome::Incorrect && self.phase == GamePhase::InProgress {
            self.advance_turn();
        }
        Ok(outcome)
    }

    /// Check whether a guess by `guesser` would be accepted, without
    /// resolving it or touching the turn state.
    ///
    /// The action mask is exactly the set of triples for which this
    /// returns `Ok`.
    pub fn validate_guess(
        &self,
        guesser: PlayerId,
        target_index: usize,
        tile_index: usize,
        number: u8,
    ) -> EngineResult<()> {
        resolver::validate(
            &self.hands,
            guesser,
            target_index,
            tile_index,
            number,
            self.config.max_tile_number,
        )
    }

    /// End the current player's turn, committing the pending tile face down.
    ///
    /// Legal only after at least one guess attempt this turn.
    pub fn end_turn(&mut self) -> EngineResult<()> {
        self.ensure_in_progress("ending a turn requires a game in progress")?;
        if !self.guess_attempted {
            return Err(GameError::IllegalStateTransition {
                reason: "the current player must attempt a guess before ending the turn",
            });
        }
        self.hands[self.current_player].commit_pending();
        self.advance_turn();
        Ok(())
    }

    /// True once at most one player still holds a private tile.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// All non-eliminated players, in player-id order.
    #[must_use]
    pub fn remaining_players(&self) -> Vec<PlayerId> {
        self.hands
            .iter()
            .filter(|(_, hand)| !hand.is_eliminated())
            .map(|(player, _)| player)
            .collect()
    }

    /// The game's result, once finished.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        if self.phase != GamePhase::Finished {
            return None;
        }
        let remaining = self.remaining_players();
        match remaining.len() {
            1 => Some(GameResult::Winner(remaining[0])),
            0 => Some(GameResult::Draw),
            _ => None,
        }
    }

    /// Every legal guess for `viewer` against the current hands.
    #[must_use]
    pub fn compute_mask(&self, viewer: PlayerId) -> ActionMask {
        ActionMask::compute(self, viewer)
    }

    /// What `viewer` is allowed to see of the current state.
    #[must_use]
    pub fn observable_state(&self, viewer: PlayerId) -> Observation {
        Observation::capture(self, viewer)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// A player's hand. The engine side is omniscient; information hiding
    /// happens in `observable_state`.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Tiles left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Capture the RNG state for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Internals ===

    fn ensure_in_progress(&self, reason: &'static str) -> EngineResult<()> {
        if self.phase == GamePhase::InProgress {
            Ok(())
        } else {
            Err(GameError::IllegalStateTransition { reason })
        }
    }

    /// Flip to `Finished` as soon as at most one player survives.
    fn refresh_phase(&mut self) {
        if self.phase == GamePhase::InProgress && self.remaining_players().len() <= 1 {
            self.phase = GamePhase::Finished;
            debug!("game over: {:?}", self.winner());
        }
    }

    /// Pass the turn to the next non-eliminated player (cyclic by id) and
    /// attempt their draw.
    fn advance_turn(&mut self) {
        debug_assert_eq!(self.phase, GamePhase::InProgress);

        let n = self.config.num_players;
        for step in 1..=n {
            let candidate = PlayerId::new(((self.current_player.index() + step) % n) as u8);
            if !self.hands[candidate].is_eliminated() {
                self.current_player = candidate;
                break;
            }
        }
        self.guess_attempted = false;
        debug!("turn passes to {}", self.current_player);

        if let Err(err) = self.hands[self.current_player].draw(&mut self.deck, &mut self.rng, false) {
            debug_assert_eq!(err, GameError::EmptyDeck);
            debug!("deck exhausted; {} takes no tile", self.current_player);
        }
    }
}
