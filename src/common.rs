//! Common types for Battleships: cell states, owners, guess results and grid errors.

use crate::bitboard::BitBoardError;

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess landed on a ship cell.
    Hit,
    /// Guess landed on open water.
    Miss,
}

impl GuessResult {
    /// Upper-case label used in turn announcements.
    pub fn label(&self) -> &'static str {
        match self {
            GuessResult::Hit => "HIT",
            GuessResult::Miss => "MISS",
        }
    }
}

/// Which side owns a grid. Drives the rendering policy: only a human-owned
/// grid ever shows its un-hit ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Owner {
    Human,
    Ai,
}

impl Owner {
    /// The other side.
    pub fn opponent(self) -> Owner {
        match self {
            Owner::Human => Owner::Ai,
            Owner::Ai => Owner::Human,
        }
    }
}

/// Display state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Console symbol for the cell.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoard(BitBoardError),
    /// A grid needs at least one cell.
    ZeroSize,
    /// The grid already holds its full complement of ships.
    CapacityExceeded { capacity: usize },
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        GridError::BitBoard(err)
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GridError::ZeroSize => write!(f, "Grid size must be at least 1"),
            GridError::CapacityExceeded { capacity } => {
                write!(f, "Maximum ships reached ({})", capacity)
            }
        }
    }
}
