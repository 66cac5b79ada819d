use rand::rngs::SmallRng;

use crate::common::MoveError;
use crate::coordinate::Coordinate;

/// A source of targets for one side of a match.
///
/// Implementations only pick coordinates; legality is checked by the
/// opponent's grid, and the match asks again when a target is refused.
pub trait Player {
    /// Choose the next coordinate to fire at.
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Coordinate, MoveError>;
}

