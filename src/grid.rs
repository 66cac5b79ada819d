//! Grid state: cell matrix, owned vessels, and placement/shot bookkeeping.

use alloc::vec::Vec;
use core::fmt;

use crate::cellset::{CellSet, CellSetError};
use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

const N: usize = BOARD_SIZE as usize;

type Cells = CellSet<u64, N>;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Vessel,
    Hit,
    Miss,
    /// Water next to a sunk vessel.
    Excluded,
}

/// Lifecycle phase of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Vessels may be placed; shots are refused.
    Setup,
    /// Shots may be resolved; placement is refused.
    Playing,
}

impl From<CellSetError> for BoardError {
    fn from(_: CellSetError) -> Self {
        BoardError::OutOfBounds
    }
}

/// One side's board.
///
/// Two coordinate sets back the rules. During setup, `exclusion` holds every
/// vessel cell and its neighbours so later vessels cannot overlap or touch.
/// During play, `targeted` holds every cell shot at plus the water revealed
/// around sunk vessels. [`Grid::begin_play`] retires the first and starts the
/// second.
pub struct Grid {
    cells: [[Cell; N]; N],
    vessels: Vec<Vessel>,
    live: usize,
    exclusion: Cells,
    targeted: Cells,
    phase: Phase,
    hidden: bool,
}

impl Grid {
    /// Create an empty grid in the setup phase.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; N]; N],
            vessels: Vec::new(),
            live: 0,
            exclusion: Cells::new(),
            targeted: Cells::new(),
            phase: Phase::Setup,
            hidden: false,
        }
    }

    /// Side length of the board.
    pub const fn size() -> usize {
        N
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether vessel cells should be concealed when the grid is rendered.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Visible state at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        if self.is_out_of_bounds(coord) {
            return None;
        }
        Some(self.cells[coord.row as usize][coord.col as usize])
    }

    /// Vessels placed on this grid, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels still afloat.
    pub fn live_vessels(&self) -> usize {
        self.live
    }

    /// Returns `true` once every placed vessel is sunk.
    pub fn is_defeated(&self) -> bool {
        self.live == 0
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        let n = N as i32;
        !((0..n).contains(&coord.row) && (0..n).contains(&coord.col))
    }

    /// Whether `coord` is blocked for placement during setup.
    pub fn is_excluded(&self, coord: Coordinate) -> bool {
        self.exclusion.contains(coord)
    }

    /// Whether `coord` is no longer a legal target during play.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(coord)
    }

    /// Place `vessel`, refusing cells off the board, overlapping another vessel
    /// or touching one. The grid is left untouched on refusal.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if self.phase != Phase::Setup {
            return Err(BoardError::WrongPhase);
        }
        if vessel
            .cells()
            .any(|c| self.is_out_of_bounds(c) || self.exclusion.contains(c))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for c in vessel.cells() {
            self.cells[c.row as usize][c.col as usize] = Cell::Vessel;
            self.exclusion.insert(c)?;
        }
        self.exclude_adjacent(&vessel, false)?;
        self.vessels.push(vessel);
        self.live += 1;
        Ok(())
    }

    /// Mark every in-bounds cell around `vessel` as unavailable.
    ///
    /// With `reveal == false` (placement) only the setup exclusion set grows.
    /// With `reveal == true` (after a sink) the cells join the targeted set and
    /// show as [`Cell::Excluded`].
    pub fn exclude_adjacent(&mut self, vessel: &Vessel, reveal: bool) -> Result<(), BoardError> {
        for c in vessel.cells() {
            for near in c.neighbourhood() {
                if self.is_out_of_bounds(near) {
                    continue;
                }
                if reveal {
                    if self.targeted.insert(near)? {
                        self.cells[near.row as usize][near.col as usize] = Cell::Excluded;
                    }
                } else {
                    self.exclusion.insert(near)?;
                }
            }
        }
        Ok(())
    }

    /// End setup: drop the placement exclusion set and accept shots.
    /// Calling it again has no effect.
    pub fn begin_play(&mut self) {
        if self.phase == Phase::Setup {
            self.exclusion.clear();
            self.targeted.clear();
            self.phase = Phase::Playing;
        }
    }

    /// Fire at `coord`.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.phase != Phase::Playing {
            return Err(BoardError::WrongPhase);
        }
        if self.is_out_of_bounds(coord) {
            return Err(BoardError::OutOfBounds);
        }
        if self.targeted.contains(coord) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.targeted.insert(coord)?;

        let Some(idx) = self.vessels.iter().position(|v| v.occupies(coord)) else {
            self.cells[coord.row as usize][coord.col as usize] = Cell::Miss;
            return Ok(ShotOutcome::Miss);
        };
        self.vessels[idx].apply_hit()?;
        self.cells[coord.row as usize][coord.col as usize] = Cell::Hit;
        if !self.vessels[idx].is_sunk() {
            return Ok(ShotOutcome::Hit);
        }
        self.live -= 1;
        let sunk = self.vessels[idx];
        self.exclude_adjacent(&sunk, true)?;
        log::debug!("vessel sunk: {:?}, {} left", sunk, self.live);
        Ok(ShotOutcome::Sunk)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  phase: {:?},\n  live: {},\n  vessels: {:?},\n  exclusion: {:?},\n  targeted: {:?}\n}}",
            self.phase, self.live, self.vessels, self.exclusion, self.targeted
        )
    }
}
