//! Board coordinates.

use std::fmt;

use crate::direction::Direction;

/// A cell coordinate, `(row, col)` with both in `0..8`.
///
/// Only the checked constructors create a `Position`, so every value is on the
/// board. Row-major index = `row * 8 + col`, so (0,0) = 0 and (7,7) = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Total number of positions.
    pub const COUNT: usize = 64;

    /// Side length of the board.
    pub const EXTENT: i32 = 8;

    /// Create a position from signed coordinates, returning `None` when off the board.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Option<Position> {
        if row >= 0 && row < Self::EXTENT && col >= 0 && col < Self::EXTENT {
            Some(Position((row * Self::EXTENT + col) as u8))
        } else {
            None
        }
    }

    /// Create a position from a row-major index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Position> {
        if index < Self::COUNT {
            Some(Position(index as u8))
        } else {
            None
        }
    }

    /// Parse algebraic notation: column letter `a`-`h` then row digit `1`-`8`.
    ///
    /// "a1" is (0,0), "d3" is (2,3), "h8" is (7,7).
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let col_byte = bytes[0].to_ascii_lowercase();
        let row_byte = bytes[1];

        if !(b'a'..=b'h').contains(&col_byte) || !(b'1'..=b'8').contains(&row_byte) {
            return None;
        }

        Position::new((row_byte - b'1') as i32, (col_byte - b'a') as i32)
    }

    /// Return the row-major index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..7).
    #[inline]
    pub const fn row(self) -> i32 {
        (self.0 / 8) as i32
    }

    /// Return the column (0..7).
    #[inline]
    pub const fn col(self) -> i32 {
        (self.0 % 8) as i32
    }

    /// Step one cell in `dir`, or `None` when that leaves the board.
    #[inline]
    pub const fn step(self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        Position::new(self.row() + dr, self.col() + dc)
    }

    /// Return `true` for the four corner cells.
    #[inline]
    pub const fn is_corner(self) -> bool {
        let edge_row = self.row() == 0 || self.row() == 7;
        let edge_col = self.col() == 0 || self.col() == 7;
        edge_row && edge_col
    }

    /// Iterate over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0u8..64).map(Position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'a' + self.col() as u8) as char;
        write!(f, "{}{}", col, self.row() + 1)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row(), self.col())
    }
}
