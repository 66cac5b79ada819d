#![cfg(feature = "std")]

use std::io::Write;
use std::string::String;

use crate::{
    common::ShotOutcome,
    coordinate::Coordinate,
    game::{EventSink, GameEvent, Side},
    grid::{Cell, Grid},
};

const SEPARATOR: &str = "--------------------";

/// Render a grid as the bordered text table shown to players.
///
/// Vessel cells are drawn as open water when the grid is hidden.
pub fn render_grid(grid: &Grid) -> String {
    let n = Grid::size();
    let mut out = String::from(" ");
    for c in 0..n {
        out.push_str(&std::format!(" | {}", c + 1));
    }
    out.push_str(" |");
    for r in 0..n {
        out.push_str(&std::format!("\n{} |", r + 1));
        for c in 0..n {
            let cell = grid
                .cell(Coordinate::new(r as i32, c as i32))
                .unwrap_or(Cell::Empty);
            out.push(' ');
            out.push(cell_symbol(cell, grid.is_hidden()));
            out.push_str(" |");
        }
    }
    out
}

fn cell_symbol(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Vessel if hidden => 'O',
        Cell::Vessel => '■',
        Cell::Hit => 'X',
        Cell::Miss => 'T',
        Cell::Excluded => '.',
    }
}

/// Print both grids, the human's first.
pub fn print_grids(out: &mut impl Write, user: &Grid, ai: &Grid) -> std::io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "User board:")?;
    writeln!(out, "{}", render_grid(user))?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "AI board:")?;
    writeln!(out, "{}", render_grid(ai))
}

/// Print the greeting shown before the first move.
pub fn print_greeting(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Welcome to the game!")?;
    writeln!(out, "Enter coordinates in the format: x y")?;
    writeln!(out, "x - row number, y - column number")
}

/// Event sink that narrates a match as plain text.
pub struct ConsoleSink<W> {
    out: W,
    labels: [&'static str; 2],
    announce_targets: [bool; 2],
}

impl<W: Write> ConsoleSink<W> {
    /// Narration for a human (first) against the AI (second). Only the AI's
    /// targets are echoed; the human just typed theirs.
    pub fn human_vs_ai(out: W) -> Self {
        Self {
            out,
            labels: ["User", "AI"],
            announce_targets: [false, true],
        }
    }

    /// Narration for two AI players.
    pub fn ai_vs_ai(out: W) -> Self {
        Self {
            out,
            labels: ["AI 1", "AI 2"],
            announce_targets: [true, true],
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self, side: Side) -> &'static str {
        match side {
            Side::First => self.labels[0],
            Side::Second => self.labels[1],
        }
    }

    fn write_event(&mut self, event: &GameEvent) -> std::io::Result<()> {
        match *event {
            GameEvent::TurnStarted { side } => {
                writeln!(self.out, "{}", SEPARATOR)?;
                writeln!(self.out, "{}'s turn!", self.label(side))
            }
            GameEvent::TargetChosen { side, target } => {
                let announce = match side {
                    Side::First => self.announce_targets[0],
                    Side::Second => self.announce_targets[1],
                };
                if announce {
                    writeln!(self.out, "{} chooses: {}", self.label(side), target)?;
                }
                Ok(())
            }
            GameEvent::ShotRejected { error, .. } => writeln!(self.out, "{}", error),
            GameEvent::ShotResolved { outcome, .. } => {
                let text = match outcome {
                    ShotOutcome::Hit => "Ship hit!",
                    ShotOutcome::Sunk => "Ship destroyed!",
                    ShotOutcome::Miss => "Miss!",
                };
                writeln!(self.out, "{}", text)
            }
            GameEvent::MatchEnded { winner } => {
                writeln!(self.out, "{}", SEPARATOR)?;
                writeln!(self.out, "{} wins!", self.label(winner))
            }
        }
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(e) = self.write_event(event) {
            log::warn!("failed to write game event: {}", e);
        }
    }
}
