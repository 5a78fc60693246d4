#![cfg(feature = "std")]

//! Line-oriented console front end.
//!
//! Generic over the reader and writer so the same code drives a terminal
//! (`stdin().lock()`, `stdout()`) and in-memory buffers in tests. All input
//! validation is delegated to [`crate::coordinate`].

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    common::{GuessResult, Owner},
    config::{AI_NAME, MAX_GRID_SIZE, MIN_GRID_SIZE},
    coordinate::{parse_coordinate, parse_grid_size, parse_number, InputError},
    grid::Grid,
    player::{Player, TargetError},
};

/// Prompting and printing over a reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line of output.
    pub fn say(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.output.write_fmt(args)?;
        writeln!(self.output)?;
        self.output.flush()
    }

    /// Print `prompt` and read one line. Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn prompt_name(&mut self) -> io::Result<Option<String>> {
        Ok(self
            .read_line("Enter your name: ")?
            .map(|name| name.trim().to_string()))
    }

    /// Ask for a board size until a valid one is entered.
    pub fn prompt_grid_size(&mut self) -> io::Result<Option<usize>> {
        let prompt = format!("Enter board size ({}-{}): ", MIN_GRID_SIZE, MAX_GRID_SIZE);
        loop {
            let Some(raw) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match parse_grid_size(&raw) {
                Ok(size) => return Ok(Some(size)),
                Err(InputError::SizeOutOfRange(_)) => self.say(format_args!(
                    "Please choose a number between {} and {}.",
                    MIN_GRID_SIZE, MAX_GRID_SIZE
                ))?,
                Err(_) => self.say(format_args!("Invalid input. Please enter a whole number."))?,
            }
        }
    }

    /// Ask for a row and a column until they name a cell on a `size×size` grid.
    ///
    /// A non-numeric row is rejected before the column is asked for.
    pub fn prompt_coordinate(&mut self, size: usize) -> io::Result<Option<(usize, usize)>> {
        let last = size.saturating_sub(1);
        let row_prompt = format!("Enter Row (0-{}): ", last);
        let col_prompt = format!("Enter Column (0-{}): ", last);
        loop {
            let Some(row) = self.read_line(&row_prompt)? else {
                return Ok(None);
            };
            if parse_number(&row).is_err() {
                self.say(format_args!("Invalid input. Please enter numbers only."))?;
                continue;
            }
            let Some(col) = self.read_line(&col_prompt)? else {
                return Ok(None);
            };
            match parse_coordinate(&row, &col, size) {
                Ok(coord) => return Ok(Some(coord)),
                Err(InputError::OffGrid { .. }) => {
                    self.say(format_args!("Off-grid! Stay between 0 and {}.", last))?
                }
                Err(_) => self.say(format_args!("Invalid input. Please enter numbers only."))?,
            }
        }
    }

    /// Print a grid under a `--- name's Board ---` header.
    pub fn write_grid(&mut self, name: &str, grid: &Grid) -> io::Result<()> {
        writeln!(self.output, "--- {}'s Board ---", name)?;
        for row in grid.render() {
            writeln!(self.output, "{}", row)?;
        }
        writeln!(self.output, "{}", "-".repeat(grid.size() * 2 + 10))?;
        self.output.flush()
    }
}

/// Human seat driven from the console.
pub struct ConsolePlayer<R, W> {
    name: String,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(name: impl Into<String>, console: Console<R, W>) -> Self {
        Self {
            name: name.into(),
            console,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    // Output failures cannot be reported through `Player`; log and carry on.
    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.console.say(args) {
            log::error!("console write failed: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        opponent: &Grid,
    ) -> Result<(usize, usize), TargetError> {
        let name = self.name.clone();
        self.say(format_args!("\n{}'s turn to guess!", name));
        match self.console.prompt_coordinate(opponent.size()) {
            Ok(coord) => coord.ok_or(TargetError::Closed),
            Err(e) => {
                log::error!("console read failed: {}", e);
                Err(TargetError::Failed(e.to_string()))
            }
        }
    }

    fn show_grids(&mut self, own: &Grid, opponent: &Grid) {
        let result = self
            .console
            .write_grid(&self.name, own)
            .and_then(|()| self.console.write_grid(AI_NAME, opponent));
        if let Err(e) = result {
            log::error!("console write failed: {}", e);
        }
    }

    fn handle_repeat_guess(&mut self, _coord: (usize, usize)) {
        self.say(format_args!("You already guessed that! Try again."));
    }

    fn handle_guess_result(&mut self, _coord: (usize, usize), result: GuessResult) {
        self.say(format_args!("Result: {}!", result.label()));
    }

    fn handle_opponent_guess(&mut self, coord: (usize, usize), result: GuessResult) {
        self.say(format_args!("\n{} is thinking...", AI_NAME));
        self.say(format_args!(
            "{} guessed ({}, {}): {}",
            AI_NAME,
            coord.0,
            coord.1,
            result.label()
        ));
    }

    fn handle_match_end(&mut self, winner: Owner) {
        match winner {
            Owner::Human => {
                let name = self.name.clone();
                self.say(format_args!("CONGRATULATIONS! {} wins!", name));
            }
            Owner::Ai => self.say(format_args!("Game Over. The {} won.", AI_NAME)),
        }
    }
}
