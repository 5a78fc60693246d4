//! Commonly used types and utilities for ease of import.

pub use crate::{
    populate, AiPlayer, Grid, GuessResult, Match, MatchConfig, MatchError, Owner, Phase, Player,
    TargetError,
};

#[cfg(feature = "std")]
pub use crate::{Console, ConsolePlayer};
