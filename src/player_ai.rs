use rand::rngs::SmallRng;
use rand::Rng;

use crate::grid::Grid;
use crate::player::{Player, TargetError};

/// Computer opponent that guesses uniformly at random among untried cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Rejection-sample a coordinate not yet guessed on `opponent`.
///
/// Returns `None` only when every cell has already been guessed.
pub fn random_untried<R: Rng + ?Sized>(rng: &mut R, opponent: &Grid) -> Option<(usize, usize)> {
    if opponent.all_guessed() {
        return None;
    }
    let size = opponent.size();
    loop {
        let r = rng.random_range(0..size);
        let c = rng.random_range(0..size);
        if !opponent.is_guessed(r, c) {
            return Some((r, c));
        }
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Grid,
    ) -> Result<(usize, usize), TargetError> {
        random_untried(rng, opponent).ok_or(TargetError::Closed)
    }
}
