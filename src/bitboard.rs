//! Fixed-size cell sets packed into an unsigned integer.
//!
//! A `BitBoard<T, N>` stores one bit per cell of an `N×N` grid, row-major,
//! so a 10×10 board fits in a `u128`. Out-of-range `(row, col)` reads are
//! `false` and out-of-range writes are ignored; callers holding a
//! [`Coordinate`] never hit either case.

use core::fmt;
use core::ops::{BitAnd, BitOr};
use num_traits::{PrimInt, Unsigned};

use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;

/// Cell set sized for the game board.
pub type CellMask = BitBoard<u128, { BOARD_SIZE as usize }>;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    const CELLS: usize = N * N;

    /// Empty set.
    pub fn new() -> Self {
        debug_assert!(Self::CELLS <= T::zero().count_zeros() as usize);
        Self { bits: T::zero() }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> Option<T> {
        (row < N && col < N).then(|| T::one() << (row * N + col))
    }

    /// Whether the zero-based `(row, col)` cell is in the set.
    pub fn get(&self, row: usize, col: usize) -> bool {
        Self::bit(row, col).is_some_and(|b| !(self.bits & b).is_zero())
    }

    pub fn set(&mut self, row: usize, col: usize) {
        if let Some(b) = Self::bit(row, col) {
            self.bits = self.bits | b;
        }
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        if let Some(b) = Self::bit(row, col) {
            self.bits = self.bits & !b;
        }
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Zero-based `(row, col)` of every member, row-major.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..Self::CELLS)
            .filter(move |&i| !((self.bits >> i) & T::one()).is_zero())
            .map(|i| (i / N, i % N))
    }
}

impl CellMask {
    pub fn contains(&self, coord: Coordinate) -> bool {
        let (r, c) = coord.row_col();
        self.get(r, c)
    }

    pub fn insert(&mut self, coord: Coordinate) {
        let (r, c) = coord.row_col();
        self.set(r, c);
    }

    pub fn remove(&mut self, coord: Coordinate) {
        let (r, c) = coord.row_col();
        self.clear(r, c);
    }

    /// Members as coordinates, in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter_set_bits()
            .filter_map(|(r, c)| Coordinate::new(c as u8 + 1, r as u8 + 1))
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self { bits: self.bits | rhs.bits }
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self { bits: self.bits & rhs.bits }
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                write!(f, "{}", if self.get(r, c) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
