use rand::{rngs::SmallRng, Rng};

use crate::{common::MoveError, config::BOARD_SIZE, coordinate::Coordinate};

use crate::player::Player;

/// Opponent that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are refused by the grid and
/// simply drawn again.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Coordinate, MoveError> {
        let n = BOARD_SIZE as i32;
        Ok(Coordinate::new(rng.random_range(0..n), rng.random_range(0..n)))
    }
}
