use alloc::string::String;
use core::fmt;
use rand::rngs::SmallRng;

use crate::{
    common::{GridError, GuessResult, Owner},
    config::MatchConfig,
    grid::Grid,
    placement::{Placement, RandomPlacement},
    player::{Player, TargetError},
};

/// Where a match currently stands.
///
/// Play alternates `HumanTurn → CheckHumanWin → AiTurn → CheckAiWin` until a
/// check finds a defeated grid. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placement,
    HumanTurn,
    CheckHumanWin,
    AiTurn,
    CheckAiWin,
    Terminated(Owner),
}

/// Errors returned by [`Match`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Underlying grid error (off-grid coordinate, capacity).
    Grid(GridError),
    /// Target was already guessed on that grid; the turn is not consumed.
    AlreadyGuessed { row: usize, col: usize },
    /// Operation not permitted in the current phase.
    WrongPhase(Phase),
    /// The match has already been won.
    Finished(Owner),
    /// A player stopped supplying targets.
    InputClosed(Owner),
    /// A player's input could not be read.
    InputFailed { side: Owner, reason: String },
}

impl From<GridError> for MatchError {
    fn from(err: GridError) -> Self {
        MatchError::Grid(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Grid(e) => write!(f, "Grid error: {}", e),
            MatchError::AlreadyGuessed { row, col } => {
                write!(f, "({}, {}) was already guessed", row, col)
            }
            MatchError::WrongPhase(phase) => write!(f, "Not allowed during {:?}", phase),
            MatchError::Finished(winner) => write!(f, "Match already won by {:?}", winner),
            MatchError::InputClosed(side) => write!(f, "{:?} player stopped responding", side),
            MatchError::InputFailed { side, reason } => {
                write!(f, "{:?} player input failed: {}", side, reason)
            }
        }
    }
}

/// Serializable outcome of a match, used by the headless simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub winner: Option<Owner>,
    pub size: usize,
    pub ship_capacity: usize,
    pub human_guesses: usize,
    pub human_hits: usize,
    pub ai_guesses: usize,
    pub ai_hits: usize,
}

/// Turn engine holding both grids and the current phase.
pub struct Match {
    config: MatchConfig,
    human: Grid,
    ai: Grid,
    phase: Phase,
}

impl Match {
    /// Create a match with two empty grids, waiting for ship placement.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        let human = Grid::new(config.size(), config.ship_capacity(), Owner::Human)?;
        let ai = Grid::new(config.size(), config.ship_capacity(), Owner::Ai)?;
        Ok(Self {
            config,
            human,
            ai,
            phase: Phase::Placement,
        })
    }

    /// Create a match and lay out both sides at random.
    pub fn with_random_layout(config: MatchConfig, rng: &mut SmallRng) -> Result<Self, MatchError> {
        let mut game = Self::new(config)?;
        game.place_ships(&mut RandomPlacement, &mut RandomPlacement, rng)?;
        Ok(game)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The human's own grid.
    pub fn human_grid(&self) -> &Grid {
        &self.human
    }

    /// The computer's grid, which the human attacks.
    pub fn ai_grid(&self) -> &Grid {
        &self.ai
    }

    /// Grid owned by `owner`.
    pub fn grid(&self, owner: Owner) -> &Grid {
        match owner {
            Owner::Human => &self.human,
            Owner::Ai => &self.ai,
        }
    }

    fn grid_mut(&mut self, owner: Owner) -> &mut Grid {
        match owner {
            Owner::Human => &mut self.human,
            Owner::Ai => &mut self.ai,
        }
    }

    /// Winner, once the match has terminated.
    pub fn winner(&self) -> Option<Owner> {
        match self.phase {
            Phase::Terminated(winner) => Some(winner),
            _ => None,
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), MatchError> {
        match self.phase {
            Phase::Terminated(winner) => Err(MatchError::Finished(winner)),
            actual if actual == expected => Ok(()),
            actual => Err(MatchError::WrongPhase(actual)),
        }
    }

    /// Lay out both sides' ships and hand the first turn to the human.
    pub fn place_ships(
        &mut self,
        human: &mut dyn Placement,
        ai: &mut dyn Placement,
        rng: &mut SmallRng,
    ) -> Result<(), MatchError> {
        self.expect_phase(Phase::Placement)?;
        human.place_ships(rng, &mut self.human)?;
        ai.place_ships(rng, &mut self.ai)?;
        self.phase = Phase::HumanTurn;
        Ok(())
    }

    fn guess(&mut self, side: Owner, row: usize, col: usize) -> Result<GuessResult, MatchError> {
        let (expected, next) = match side {
            Owner::Human => (Phase::HumanTurn, Phase::CheckHumanWin),
            Owner::Ai => (Phase::AiTurn, Phase::CheckAiWin),
        };
        self.expect_phase(expected)?;
        let target = self.grid_mut(side.opponent());
        if target.is_guessed(row, col) {
            return Err(MatchError::AlreadyGuessed { row, col });
        }
        let result = target.resolve_guess(row, col)?;
        log::debug!("{:?} guessed ({}, {}): {:?}", side, row, col, result);
        self.phase = next;
        Ok(result)
    }

    /// Resolve the human's guess against the computer's grid.
    pub fn human_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, MatchError> {
        self.guess(Owner::Human, row, col)
    }

    /// Resolve the computer's guess against the human's grid.
    pub fn ai_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, MatchError> {
        self.guess(Owner::Ai, row, col)
    }

    /// Evaluate the win condition for the side that just guessed.
    pub fn check_win(&mut self) -> Result<Phase, MatchError> {
        self.phase = match self.phase {
            Phase::CheckHumanWin if self.ai.is_defeated() => Phase::Terminated(Owner::Human),
            Phase::CheckHumanWin => Phase::AiTurn,
            Phase::CheckAiWin if self.human.is_defeated() => Phase::Terminated(Owner::Ai),
            Phase::CheckAiWin => Phase::HumanTurn,
            Phase::Terminated(winner) => return Err(MatchError::Finished(winner)),
            actual => return Err(MatchError::WrongPhase(actual)),
        };
        if let Some(winner) = self.winner() {
            log::info!("match over, {:?} wins", winner);
        }
        Ok(self.phase)
    }

    fn take_turn(
        &mut self,
        side: Owner,
        attacker: &mut dyn Player,
        defender: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<(), MatchError> {
        loop {
            let coord = match attacker.select_target(rng, self.grid(side.opponent())) {
                Ok(coord) => coord,
                Err(TargetError::Closed) => return Err(MatchError::InputClosed(side)),
                Err(TargetError::Failed(reason)) => {
                    return Err(MatchError::InputFailed { side, reason })
                }
            };
            match self.guess(side, coord.0, coord.1) {
                Ok(result) => {
                    attacker.handle_guess_result(coord, result);
                    defender.handle_opponent_guess(coord, result);
                    return Ok(());
                }
                Err(MatchError::AlreadyGuessed { .. }) => {
                    attacker.handle_repeat_guess(coord);
                    attacker.show_grids(self.grid(side), self.grid(side.opponent()));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run the match to completion and return the winner.
    pub fn play(
        &mut self,
        human: &mut dyn Player,
        ai: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<Owner, MatchError> {
        loop {
            match self.phase {
                Phase::Placement => return Err(MatchError::WrongPhase(Phase::Placement)),
                Phase::HumanTurn => {
                    human.show_grids(&self.human, &self.ai);
                    ai.show_grids(&self.ai, &self.human);
                    self.take_turn(Owner::Human, human, ai, rng)?;
                }
                Phase::AiTurn => self.take_turn(Owner::Ai, ai, human, rng)?,
                Phase::CheckHumanWin | Phase::CheckAiWin => {
                    self.check_win()?;
                }
                Phase::Terminated(winner) => {
                    human.handle_match_end(winner);
                    ai.handle_match_end(winner);
                    return Ok(winner);
                }
            }
        }
    }

    /// Snapshot of the match outcome so far.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: self.winner(),
            size: self.config.size(),
            ship_capacity: self.config.ship_capacity(),
            human_guesses: self.ai.guess_count(),
            human_hits: self.ai.hit_count(),
            ai_guesses: self.human.guess_count(),
            ai_hits: self.human.hit_count(),
        }
    }
}
