//! Ship layout generation.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::GridError;
use crate::grid::Grid;

/// Fill `grid` with ships at uniformly random, distinct coordinates until it
/// reaches capacity.
///
/// Candidates already holding a ship are rejected before `place_ship` is
/// called, so placement never trips the capacity check. A capacity larger
/// than the number of cells could never be satisfied and is rejected up front.
pub fn populate<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let size = grid.size();
    if grid.ship_capacity() > size * size {
        return Err(GridError::CapacityExceeded {
            capacity: grid.ship_capacity(),
        });
    }
    while !grid.is_full() {
        let r = rng.random_range(0..size);
        let c = rng.random_range(0..size);
        if !grid.has_ship(r, c) {
            grid.place_ship(r, c)?;
        }
    }
    Ok(())
}

/// Strategy used to lay out a side's ships at match start.
pub trait Placement {
    /// Place every ship onto the provided grid.
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut Grid) -> Result<(), GridError>;
}

/// Uniform random layout via [`populate`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlacement;

impl Placement for RandomPlacement {
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut Grid) -> Result<(), GridError> {
        populate(grid, rng)
    }
}

/// Predetermined layout, placed in the given order.
#[derive(Debug, Clone, Default)]
pub struct FixedPlacement {
    coords: Vec<(usize, usize)>,
}

impl FixedPlacement {
    pub fn new(coords: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            coords: coords.into_iter().collect(),
        }
    }
}

impl Placement for FixedPlacement {
    fn place_ships(&mut self, _rng: &mut SmallRng, grid: &mut Grid) -> Result<(), GridError> {
        for &(r, c) in &self.coords {
            grid.place_ship(r, c)?;
        }
        Ok(())
    }
}
