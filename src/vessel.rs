//! Vessels: straight runs of cells with hit-point tracking.

use core::fmt;

use crate::common::BoardError;
use crate::coordinate::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells run along the row, column increasing.
    Horizontal,
    /// Cells run down the column, row increasing.
    Vertical,
}

/// A vessel anchored at its bow.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Vessel {
    /// Build a vessel with full hit-points. Bounds are checked by the grid on
    /// placement, not here.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        Ok(Vessel {
            bow,
            length,
            orientation,
            hit_points: length,
        })
    }

    /// Occupied cells, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (d_row, d_col) = match self.orientation {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        };
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(d_row * i, d_col * i))
    }

    /// Returns `true` if `coord` is one of this vessel's cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Take one hit.
    pub fn apply_hit(&mut self) -> Result<(), BoardError> {
        if self.hit_points == 0 {
            return Err(BoardError::VesselAlreadySunk);
        }
        self.hit_points -= 1;
        Ok(())
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ bow: ({}, {}), length: {}, orientation: {:?}, hit_points: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.hit_points,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_cells_advance_column() {
        let v = Vessel::new(Coordinate::new(2, 1), 3, Orientation::Horizontal).unwrap();
        let cells: alloc::vec::Vec<_> = v.cells().collect();
        assert_eq!(
            cells,
            [Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]
        );
    }

    #[test]
    fn vertical_cells_advance_row() {
        let v = Vessel::new(Coordinate::new(0, 4), 2, Orientation::Vertical).unwrap();
        let cells: alloc::vec::Vec<_> = v.cells().collect();
        assert_eq!(cells, [Coordinate::new(0, 4), Coordinate::new(1, 4)]);
        assert!(v.occupies(Coordinate::new(1, 4)));
        assert!(!v.occupies(Coordinate::new(2, 4)));
    }

    #[test]
    fn hit_points_never_go_negative() {
        let mut v = Vessel::new(Coordinate::new(0, 0), 1, Orientation::Horizontal).unwrap();
        v.apply_hit().unwrap();
        assert!(v.is_sunk());
        assert_eq!(v.apply_hit(), Err(BoardError::VesselAlreadySunk));
        assert_eq!(v.hit_points(), 0);
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(
            Vessel::new(Coordinate::new(0, 0), 0, Orientation::Vertical),
            Err(BoardError::InvalidLength)
        );
    }
}
