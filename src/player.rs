use alloc::string::String;
use core::fmt;

use rand::rngs::SmallRng;

use crate::common::{GuessResult, Owner};
use crate::grid::Grid;

/// Why a player could not supply a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// The player's input ran out (for example, end of stdin).
    Closed,
    /// Reading the player's input failed.
    Failed(String),
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::Closed => write!(f, "input closed"),
            TargetError::Failed(reason) => write!(f, "input failed: {}", reason),
        }
    }
}

/// Interface implemented by the two seats of a match.
///
/// The engine asks a player for targets and keeps it informed of what
/// happens; everything else, including any I/O, belongs to the player.
pub trait Player {
    /// Choose the next target on `opponent`.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Grid,
    ) -> Result<(usize, usize), TargetError>;

    /// Called at the start of each round, and again after a repeated guess,
    /// with the player's own grid and the grid it is attacking.
    fn show_grids(&mut self, _own: &Grid, _opponent: &Grid) {}

    /// The last target had already been guessed; another will be requested.
    fn handle_repeat_guess(&mut self, _coord: (usize, usize)) {}

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: (usize, usize), _result: GuessResult) {}

    /// Inform the player of an opponent guess against its grid.
    fn handle_opponent_guess(&mut self, _coord: (usize, usize), _result: GuessResult) {}

    /// The match is over.
    fn handle_match_end(&mut self, _winner: Owner) {}
}
