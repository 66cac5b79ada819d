//! A fixed-size set of board coordinates packed into one unsigned integer.
//!
//! The set is `no_std` friendly and never allocates. An `N×N` board is mapped
//! row-major onto the low `N * N` bits of `T`, so `T` must hold at least
//! `N * N` bits.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// Coordinate lies outside [0..N).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSetError {
    pub row: i32,
    pub col: i32,
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) is off the board", self.row, self.col)
    }
}

/// Set of coordinates on an N×N board stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        CellSet { bits: T::zero() }
    }

    /// Bit position of `coord`, or `None` if it is off the board.
    #[inline]
    fn bit(coord: Coordinate) -> Option<T> {
        let n = N as i32;
        if (0..n).contains(&coord.row) && (0..n).contains(&coord.col) {
            Some(T::one() << (coord.row as usize * N + coord.col as usize))
        } else {
            None
        }
    }

    /// Membership test. Off-board coordinates are never members.
    pub fn contains(&self, coord: Coordinate) -> bool {
        Self::bit(coord).is_some_and(|bit| !(self.bits & bit).is_zero())
    }

    /// Adds `coord`, returning `true` if it was not present before.
    pub fn insert(&mut self, coord: Coordinate) -> Result<bool, CellSetError> {
        let bit = Self::bit(coord).ok_or(CellSetError {
            row: coord.row,
            col: coord.col,
        })?;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N as i32 {
            for c in 0..N as i32 {
                let mark = if self.contains(Coordinate::new(r, c)) { '■' } else { '□' };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
