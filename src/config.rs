//! Game constants and validated match configuration.

use alloc::string::String;
use core::fmt;

/// Smallest board the size prompt accepts.
pub const MIN_GRID_SIZE: usize = 5;
/// Largest board the size prompt accepts.
pub const MAX_GRID_SIZE: usize = 10;
/// Ships placed on each side unless configured otherwise.
pub const DEFAULT_SHIP_CAPACITY: usize = 4;
/// Display name of the computer side.
pub const AI_NAME: &str = "Computer";

/// Port the liveness responder binds when none is configured.
pub const DEFAULT_HEALTH_PORT: u16 = 8000;
/// Environment variable the deployment platform uses to hand out a port.
pub const HEALTH_PORT_ENV: &str = "PORT";

/// Errors returned when building a [`MatchConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    SizeOutOfRange(usize),
    /// Ship capacity is zero or larger than the number of cells.
    CapacityOutOfRange { capacity: usize, cells: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SizeOutOfRange(size) => write!(
                f,
                "board size {} must be between {} and {}",
                size, MIN_GRID_SIZE, MAX_GRID_SIZE
            ),
            ConfigError::CapacityOutOfRange { capacity, cells } => {
                write!(f, "ship count {} must be between 1 and {}", capacity, cells)
            }
        }
    }
}

/// Parameters of a single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    size: usize,
    ship_capacity: usize,
    player_name: String,
}

impl MatchConfig {
    pub fn new(
        size: usize,
        ship_capacity: usize,
        player_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(ConfigError::SizeOutOfRange(size));
        }
        let cells = size * size;
        if ship_capacity == 0 || ship_capacity > cells {
            return Err(ConfigError::CapacityOutOfRange {
                capacity: ship_capacity,
                cells,
            });
        }
        Ok(Self {
            size,
            ship_capacity,
            player_name: player_name.into(),
        })
    }

    /// Configuration with the default ship count.
    pub fn with_defaults(size: usize, player_name: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(size, DEFAULT_SHIP_CAPACITY, player_name)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn ship_capacity(&self) -> usize {
        self.ship_capacity
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }
}

/// Port for the liveness responder, taken from `PORT` when it parses.
#[cfg(feature = "std")]
pub fn health_port_from_env() -> u16 {
    std::env::var(HEALTH_PORT_ENV)
        .ok()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_HEALTH_PORT)
}

/// RNG for layouts and computer guesses: fixed when `seed` is given,
/// otherwise seeded from the thread RNG.
#[cfg(feature = "std")]
pub fn rng_from_seed(seed: Option<u64>) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    match seed {
        Some(s) => rand::rngs::SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            rand::rngs::SmallRng::from_rng(&mut seed_rng)
        }
    }
}
