#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{common::MoveError, coordinate::Coordinate, player::Player};

/// Why a line of input was not accepted as a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetParseError {
    /// The line did not hold exactly two tokens.
    WrongTokenCount(usize),
    /// A token was not a non-negative decimal number.
    NotANumber,
}

impl core::fmt::Display for TargetParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TargetParseError::WrongTokenCount(_) => write!(f, "Enter 2 coordinates!"),
            TargetParseError::NotANumber => write!(f, "Enter numbers!"),
        }
    }
}

impl std::error::Error for TargetParseError {}

/// Parse a `row col` line of 1-based numbers into a 0-based coordinate.
///
/// Zero is accepted and ends up off the board, where the grid reports it.
pub fn parse_target(line: &str) -> Result<Coordinate, TargetParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens[..] else {
        return Err(TargetParseError::WrongTokenCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_number(row)? - 1, parse_number(col)? - 1))
}

fn parse_number(token: &str) -> Result<i32, TargetParseError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TargetParseError::NotANumber);
    }
    token.parse().map_err(|_| TargetParseError::NotANumber)
}

/// Human player typing targets on a line-oriented stream.
pub struct CliPlayer<I, O> {
    input: I,
    output: O,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning the output stream.
    pub fn into_output(self) -> O {
        self.output
    }

    fn read_line(&mut self) -> Result<String, MoveError> {
        write!(self.output, "Your turn: ").map_err(write_failed)?;
        self.output.flush().map_err(write_failed)?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(MoveError::InputClosed),
            Ok(_) => Ok(line),
            Err(e) => {
                log::warn!("reading target failed: {}", e);
                Err(MoveError::InputFailed)
            }
        }
    }
}

fn write_failed(e: io::Error) -> MoveError {
    log::warn!("writing prompt failed: {}", e);
    MoveError::InputFailed
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    fn select_target(&mut self, _rng: &mut SmallRng) -> Result<Coordinate, MoveError> {
        loop {
            let line = self.read_line()?;
            match parse_target(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}", e).map_err(write_failed)?,
            }
        }
    }
}
