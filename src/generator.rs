//! Random fleet placement.
//!
//! Placement is generate-and-test: sample a bow and an orientation, try to
//! place, resample on refusal. One attempt counter spans the whole fleet so a
//! grid that has painted itself into a corner is abandoned rather than retried
//! forever.

use rand::Rng;

use crate::common::{BoardError, PlacementError};
use crate::config::{BOARD_SIZE, FLEET, FLEET_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};

const fn fleet_has_no_empty_vessels() -> bool {
    let mut i = 0;
    while i < FLEET_SIZE {
        if FLEET[i] == 0 {
            return false;
        }
        i += 1;
    }
    true
}

// `random_grid` retries forever, so the standard fleet must never be refused
// outright.
const _: () = assert!(fleet_has_no_empty_vessels());

/// Place vessels of the given `lengths` on a fresh grid, in order, giving up
/// once `max_attempts` placements have been tried across the whole fleet.
///
/// On success the grid has already left its setup phase and is ready to be
/// shot at. A zero length is refused before anything is sampled.
pub fn try_place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    lengths: &[usize],
    max_attempts: usize,
) -> Result<Grid, PlacementError> {
    if lengths.contains(&0) {
        return Err(PlacementError::InvalidLength);
    }
    let mut grid = Grid::new();
    let mut attempts = 0;
    for &length in lengths {
        loop {
            attempts += 1;
            if attempts > max_attempts {
                return Err(PlacementError::Exhausted { attempts: max_attempts });
            }
            let vessel = random_vessel(rng, length).map_err(|_| PlacementError::InvalidLength)?;
            match grid.place_vessel(vessel) {
                Ok(()) => break,
                Err(BoardError::InvalidPlacement) => {
                    log::trace!("placement rejected: {:?}", vessel);
                }
                Err(e) => {
                    log::warn!("unexpected placement failure: {}", e);
                    return Err(PlacementError::Exhausted { attempts });
                }
            }
        }
    }
    grid.begin_play();
    Ok(grid)
}

/// A grid carrying the standard fleet, restarting from scratch whenever the
/// attempt ceiling is hit.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut restarts = 0usize;
    loop {
        match try_place_fleet(rng, &FLEET, MAX_PLACEMENT_ATTEMPTS) {
            Ok(grid) => {
                log::debug!("fleet placed after {} restarts", restarts);
                return grid;
            }
            Err(e) => {
                restarts += 1;
                log::debug!("{}; restarting with a fresh grid", e);
            }
        }
    }
}

fn random_vessel<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<Vessel, BoardError> {
    let n = BOARD_SIZE as i32;
    let bow = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Vessel::new(bow, length, orientation)
}
