#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    common::{ShotError, ShotOutcome},
    coord::Coordinate,
    game::TurnView,
    player::TargetingSource,
};

/// Why a line of input could not be read as a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two tokens.
    WrongTokenCount,
    /// A token is not a non-negative integer.
    NotANumber,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::WrongTokenCount => write!(f, "Enter two coordinates!"),
            InputError::NotANumber => write!(f, "Enter numbers!"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse `"row col"` with 1-based numbers into a 0-based coordinate.
///
/// Bounds are not checked here; `"0 4"` yields row -1, which the grid
/// rejects as out of bounds.
pub fn parse_coord(input: &str) -> Result<Coordinate, InputError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::WrongTokenCount);
    };
    let parse = |s: &str| -> Result<i32, InputError> {
        if !s.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(InputError::NotANumber);
        }
        s.parse::<u16>()
            .map(|v| i32::from(v) - 1)
            .map_err(|_| InputError::NotANumber)
    };
    Ok(Coordinate::new(parse(*row)?, parse(*col)?))
}

/// Format a 0-based coordinate the way the player types it.
pub fn coord_to_string(c: Coordinate) -> String {
    format!("{} {}", c.row + 1, c.col + 1)
}

/// Interactive player reading targets from a text stream.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_boards(&mut self, view: &TurnView<'_>) -> io::Result<()> {
        writeln!(self.output, "{}", "-".repeat(20))?;
        writeln!(self.output, "Your board:")?;
        write!(self.output, "{}", view.own_grid())?;
        writeln!(self.output, "{}", "-".repeat(20))?;
        writeln!(
            self.output,
            "Opponent board ({} ships afloat):",
            view.target().ships_afloat()
        )?;
        write!(self.output, "{}", view.target())?;
        Ok(())
    }

    // Terminal write errors are ignored.
    fn say(&mut self, msg: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.output, "{}", msg);
    }
}

impl<R: BufRead, W: Write> TargetingSource for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        view: &TurnView<'_>,
    ) -> anyhow::Result<Coordinate> {
        self.print_boards(view)?;
        loop {
            write!(self.output, "Your move (row col): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed before a move was entered"));
            }
            match parse_coord(&line) {
                Ok(c) => return Ok(c),
                Err(e) => writeln!(self.output, " {} ", e)?,
            }
        }
    }

    fn handle_rejected(&mut self, _target: Coordinate, err: ShotError) {
        self.say(format_args!("{}", err));
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.say(format_args!("You fired at {} -> {}", coord_to_string(target), outcome));
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.say(format_args!(
            "Opponent fired at {} -> {}",
            coord_to_string(target),
            outcome
        ));
    }

    fn handle_game_over(&mut self, won: bool) {
        if won {
            self.say(format_args!("You won! All enemy ships are destroyed."));
        } else {
            self.say(format_args!("You lost. All your ships have been destroyed."));
        }
    }
}
