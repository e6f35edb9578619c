//! Fleet definitions and placed-ship state backed by `BitBoard` masks.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Static description of a fleet member: name, display symbol, length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    symbol: char,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, symbol: char, length: usize) -> Self {
        Self {
            name,
            symbol,
            length,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Single-character marker used when rendering the grid.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an N×N board. Identity is the ship's occupancy mask,
/// never its display symbol; hits against it are tracked in a second mask.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    class: ShipClass,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Place a ship at (`row`, `col`) with `orientation`. Fails without side
    /// effects when the span would leave the grid.
    pub fn new(
        class: ShipClass,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let len = class.length();
        if orientation == Orientation::Horizontal {
            if col + len > N {
                return Err(BoardError::ShipOutOfBounds);
            }
        } else if row + len > N {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = BitBoard::<T, N>::new();
        for i in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            mask.set(r, c)?;
        }

        Ok(Ship {
            class,
            orientation,
            row,
            col,
            mask,
            hits: BitBoard::<T, N>::new(),
        })
    }

    /// Whether this ship occupies (`row`, `col`).
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Register a hit at (`row`, `col`). Returns `true` if the cell belongs
    /// to this ship and the hit was recorded.
    pub fn record_hit(&mut self, row: usize, col: usize) -> bool {
        if self.occupies(row, col) {
            let _ = self.hits.set(row, col);
            true
        } else {
            false
        }
    }

    /// True when every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.class.length()
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.class.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits.count_ones(),
            self.class.length(),
        )
    }
}
