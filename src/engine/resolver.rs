//! Guess validation and resolution.
//!
//! A guess is checked in a fixed order - target index, self-target, target
//! eliminated, number range, tile index, tile already public, duplicate
//! guess - and the first failing check wins. No state changes on any
//! failure. Once every check passes the guess resolves: a correct guess
//! reveals the target tile and leaves the guesser's pending tile untouched;
//! a wrong guess is recorded in the tile's history and forfeits the
//! guesser's pending tile.

use log::trace;

use crate::core::error::{EngineResult, GameError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::tiles::hand::Hand;

/// Result of a fully validated guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guessed number matches; the tile is now public.
    Correct,
    /// The guessed number does not match; the guesser's pending tile, if
    /// any, has been forfeited.
    Incorrect,
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }
}

/// Validate a guess without resolving it.
///
/// Checks run in the documented order; the first failure is returned and
/// nothing is mutated. `Ok` means `resolve` would accept the same guess.
pub(crate) fn validate(
    hands: &PlayerMap<Hand>,
    guesser: PlayerId,
    target_index: usize,
    tile_index: usize,
    number: u8,
    max_tile_number: u8,
) -> EngineResult<()> {
    let player_count = hands.player_count();
    if target_index >= player_count {
        return Err(GameError::TargetIndexOutOfRange { index: target_index, player_count });
    }

    let target = PlayerId::new(target_index as u8);
    if target == guesser {
        return Err(GameError::TargetIsSelf);
    }
    if hands[target].is_eliminated() {
        return Err(GameError::TargetAlreadyEliminated { target });
    }
    if number == 0 || number > max_tile_number {
        return Err(GameError::NumberOutOfRange { number, max_tile_number });
    }

    let hand_size = hands[target].len();
    if tile_index >= hand_size {
        return Err(GameError::TileIndexOutOfRange { index: tile_index, hand_size });
    }

    let tile = &hands[target].sorted_view()[tile_index];
    if tile.is_public() {
        return Err(GameError::TileAlreadyPublic { index: tile_index });
    }
    if tile.was_guessed(guesser, number) {
        return Err(GameError::DuplicateGuess { guesser, number });
    }

    Ok(())
}

/// Validate and resolve a guess by `guesser` against another player's tile.
pub(crate) fn resolve(
    hands: &mut PlayerMap<Hand>,
    guesser: PlayerId,
    target_index: usize,
    tile_index: usize,
    number: u8,
    max_tile_number: u8,
) -> EngineResult<GuessOutcome> {
    validate(hands, guesser, target_index, tile_index, number, max_tile_number)?;

    let target = PlayerId::new(target_index as u8);
    let (guesser_hand, target_hand) = hands.pair_mut(guesser, target);
    let tile = target_hand.tile_mut(tile_index);

    if tile.number() == number {
        tile.reveal();
        trace!("{guesser} correctly guessed {number} on {target}'s tile {tile_index}");
        Ok(GuessOutcome::Correct)
    } else {
        tile.record_guess(guesser, number);
        guesser_hand.forfeit_pending();
        trace!("{guesser} wrongly guessed {number} on {target}'s tile {tile_index}");
        Ok(GuessOutcome::Incorrect)
    }
}
