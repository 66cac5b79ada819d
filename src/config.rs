/// Side length of the square board.
pub const BOARD_SIZE: u8 = 6;

/// Number of vessels in the fleet.
pub const FLEET_SIZE: usize = 7;

/// Vessel lengths, placed in this order.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of vessel cells in the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for one whole fleet before the generator gives
/// up on the current grid and starts over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
