//! One side's playing field: ship placement, guess history and cell display state.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{Cell, GridError, GuessResult, Owner};

type BB = BitBoard<u128>;

/// Main grid state: ship set, guessed set and the per-cell display array.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    ship_capacity: usize,
    owner: Owner,
    cells: Vec<Cell>,
    ships: BB,
    guesses: BB,
}

impl Grid {
    /// Create an empty `size×size` grid that will hold up to `ship_capacity` ships.
    pub fn new(size: usize, ship_capacity: usize, owner: Owner) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let empty = BB::new(size)?;
        Ok(Grid {
            size,
            ship_capacity,
            owner,
            cells: vec![Cell::Empty; size * size],
            ships: empty,
            guesses: empty,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn ship_capacity(&self) -> usize {
        self.ship_capacity
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Number of ships placed so far.
    pub fn ship_count(&self) -> usize {
        self.ships.count_ones()
    }

    /// Number of distinct coordinates guessed against this grid.
    pub fn guess_count(&self) -> usize {
        self.guesses.count_ones()
    }

    /// Number of ships that have been found.
    pub fn hit_count(&self) -> usize {
        (self.ships & self.guesses)
            .map(|hits| hits.count_ones())
            .unwrap_or(0)
    }

    /// Returns `true` when the grid is at capacity.
    pub fn is_full(&self) -> bool {
        self.ship_count() >= self.ship_capacity
    }

    /// Returns `true` if (row, col) holds a ship. Off-grid coordinates never do.
    pub fn has_ship(&self, row: usize, col: usize) -> bool {
        self.ships.get(row, col).unwrap_or(false)
    }

    /// Returns `true` if (row, col) has already been guessed.
    pub fn is_guessed(&self, row: usize, col: usize) -> bool {
        self.guesses.get(row, col).unwrap_or(false)
    }

    /// Returns `true` once every cell has been guessed.
    pub fn all_guessed(&self) -> bool {
        self.guesses.is_full()
    }

    /// Ship coordinates in row-major order.
    pub fn ships(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ships.iter_set_bits()
    }

    /// Display classification of a cell, or `None` when off-grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Add a ship at (row, col).
    ///
    /// Placing on a cell that already holds a ship leaves the ship set
    /// unchanged. Only human-owned grids mark the cell as a ship, so an
    /// AI-owned grid never renders its un-hit ships.
    pub fn place_ship(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        if self.is_full() {
            log::warn!(
                "refusing ship at ({}, {}): {:?} grid already holds {} ships",
                row,
                col,
                self.owner,
                self.ship_capacity
            );
            return Err(GridError::CapacityExceeded {
                capacity: self.ship_capacity,
            });
        }
        self.ships.set(row, col)?;
        if self.owner == Owner::Human {
            self.cells[row * self.size + col] = Cell::Ship;
        }
        log::debug!("{:?} ship placed at ({}, {})", self.owner, row, col);
        Ok(())
    }

    /// Process a guess at (row, col), recording it and marking the cell.
    ///
    /// Repeat guesses are accepted and leave the guessed set unchanged.
    pub fn resolve_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, GridError> {
        let hit = self.ships.get(row, col)?;
        self.guesses.set(row, col)?;
        let idx = row * self.size + col;
        if hit {
            self.cells[idx] = Cell::Hit;
            Ok(GuessResult::Hit)
        } else {
            self.cells[idx] = Cell::Miss;
            Ok(GuessResult::Miss)
        }
    }

    /// Returns `true` when every ship coordinate has been guessed.
    pub fn is_defeated(&self) -> bool {
        self.ships.is_subset_of(&self.guesses)
    }

    /// Rendered rows, top to bottom, with cell symbols separated by spaces.
    ///
    /// Each call starts a fresh pass over the current cell state.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.size).map(|row| {
            let mut line = String::with_capacity(row.len() * 2);
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push(cell.symbol());
            }
            line
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  owner: {:?},\n  capacity: {},\n  ships: {:?},\n  guesses: {:?}\n}}",
            self.owner, self.ship_capacity, self.ships, self.guesses
        )
    }
}
