//! Contents of a single board cell.

use std::fmt;

use crate::side::Side;

/// A board cell: empty, or holding a disc of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// Return the side owning this cell, if any.
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Side::Dark),
            Cell::Light => Some(Side::Light),
        }
    }

    /// Return `true` if no disc sits on this cell.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Parse a layout character.
    ///
    /// `.` and `-` are empty, `X`/`B` are Dark and `O`/`W` are Light (either case).
    pub fn from_layout_char(c: char) -> Option<Cell> {
        match c.to_ascii_uppercase() {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'B' => Some(Cell::Dark),
            'O' | 'W' => Some(Cell::Light),
            _ => None,
        }
    }

    /// Layout character used when printing.
    #[inline]
    pub const fn layout_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => 'X',
            Cell::Light => 'O',
        }
    }
}

impl From<Side> for Cell {
    #[inline]
    fn from(side: Side) -> Cell {
        match side {
            Side::Dark => Cell::Dark,
            Side::Light => Cell::Light,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;
    use crate::side::Side;

    #[test]
    fn side_of_cell() {
        assert_eq!(Cell::Empty.side(), None);
        assert_eq!(Cell::Dark.side(), Some(Side::Dark));
        assert_eq!(Cell::Light.side(), Some(Side::Light));
    }

    #[test]
    fn from_side() {
        for side in Side::ALL {
            assert_eq!(Cell::from(side).side(), Some(side));
        }
    }

    #[test]
    fn layout_chars() {
        assert_eq!(Cell::from_layout_char('.'), Some(Cell::Empty));
        assert_eq!(Cell::from_layout_char('x'), Some(Cell::Dark));
        assert_eq!(Cell::from_layout_char('B'), Some(Cell::Dark));
        assert_eq!(Cell::from_layout_char('o'), Some(Cell::Light));
        assert_eq!(Cell::from_layout_char('W'), Some(Cell::Light));
        assert_eq!(Cell::from_layout_char('?'), None);
        assert_eq!(format!("{}", Cell::Dark), "X");
    }

    #[test]
    fn default_is_empty() {
        assert!(Cell::default().is_empty());
    }
}
