//! Common types: board errors, shot outcomes and match-level failures.

use crate::game::Side;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a vessel that is still afloat. The shooter moves again.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot struck the last intact cell of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by grid and vessel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    /// Target lies outside the board.
    OutOfBounds,
    /// Target was already shot at, or is part of a revealed exclusion zone.
    AlreadyTargeted,
    /// Vessel leaves the board, overlaps or touches another vessel.
    InvalidPlacement,
    /// Operation not allowed in the grid's current phase.
    WrongPhase,
    /// Hit applied to a vessel with no hit-points left.
    VesselAlreadySunk,
    /// Vessel length must be at least 1.
    InvalidLength,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "You tried to shoot outside the board!"),
            BoardError::AlreadyTargeted => write!(f, "You've already shot at this cell!"),
            BoardError::InvalidPlacement => write!(f, "Vessel does not fit at this position"),
            BoardError::WrongPhase => write!(f, "Operation not allowed in the current phase"),
            BoardError::VesselAlreadySunk => write!(f, "Vessel is already sunk"),
            BoardError::InvalidLength => write!(f, "Vessel length must be at least 1"),
        }
    }
}

/// Why the fleet generator could not produce a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The attempt ceiling was reached before the whole fleet fit.
    Exhausted { attempts: usize },
    /// A requested vessel length was zero.
    InvalidLength,
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::Exhausted { attempts } => {
                write!(f, "Fleet placement gave up after {} attempts", attempts)
            }
            PlacementError::InvalidLength => write!(f, "Fleet contains a zero-length vessel"),
        }
    }
}

/// A move source could not produce a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Input reached end of stream.
    InputClosed,
    /// Reading input failed.
    InputFailed,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::InputClosed => write!(f, "Input closed before a target was entered"),
            MoveError::InputFailed => write!(f, "Failed to read input"),
        }
    }
}

/// Errors that stop a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// A grid was handed to the match before its setup phase ended.
    GridNotReady(Side),
    /// A turn was requested after the match ended.
    Finished,
    /// The active player could not produce a target.
    Move(MoveError),
}

impl From<MoveError> for MatchError {
    fn from(err: MoveError) -> Self {
        MatchError::Move(err)
    }
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::GridNotReady(side) => write!(f, "{:?} grid is still in setup", side),
            MatchError::Finished => write!(f, "Match already finished"),
            MatchError::Move(e) => write!(f, "Move failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Move(e) => Some(e),
            _ => None,
        }
    }
}
