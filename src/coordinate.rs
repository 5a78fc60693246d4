//! Validation of raw text typed at the console prompts.
//!
//! Nothing here performs I/O: callers read the tokens, call these functions
//! and re-prompt on error.

use alloc::string::{String, ToString};
use core::fmt;

use crate::config::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Reasons a raw token was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Token is not a whole number.
    NonNumeric(String),
    /// Coordinate lies outside `[0, size)`.
    OffGrid { row: i64, col: i64, size: usize },
    /// Board size outside the supported range.
    SizeOutOfRange(i64),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonNumeric(token) => write!(f, "'{}' is not a whole number", token),
            InputError::OffGrid { row, col, size } => write!(
                f,
                "({}, {}) is off-grid, stay between 0 and {}",
                row,
                col,
                size.saturating_sub(1)
            ),
            InputError::SizeOutOfRange(size) => write!(
                f,
                "board size {} must be between {} and {}",
                size, MIN_GRID_SIZE, MAX_GRID_SIZE
            ),
        }
    }
}

/// Parse one whole-number token, ignoring surrounding whitespace.
pub fn parse_number(raw: &str) -> Result<i64, InputError> {
    let token = raw.trim();
    token
        .parse()
        .map_err(|_| InputError::NonNumeric(token.to_string()))
}

/// Parse a (row, col) pair and check it lies on a `size×size` grid.
pub fn parse_coordinate(
    raw_row: &str,
    raw_col: &str,
    size: usize,
) -> Result<(usize, usize), InputError> {
    let row = parse_number(raw_row)?;
    let col = parse_number(raw_col)?;
    let on_grid = |v: i64| usize::try_from(v).ok().filter(|&v| v < size);
    match (on_grid(row), on_grid(col)) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err(InputError::OffGrid { row, col, size }),
    }
}

/// Parse the board size answer, accepting `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
pub fn parse_grid_size(raw: &str) -> Result<usize, InputError> {
    let size = parse_number(raw)?;
    usize::try_from(size)
        .ok()
        .filter(|s| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(s))
        .ok_or(InputError::SizeOutOfRange(size))
}
