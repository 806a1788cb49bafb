//! Error types for board mutation and layout parsing.

use crate::position::Position;
use crate::side::Side;

/// Errors from applying moves to, or validating, a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The target cell is occupied or the placement brackets no opponent run.
    #[error("illegal move {position} for {side}")]
    IllegalMove {
        /// Where the disc was to be placed.
        position: Position,
        /// Who tried to place it.
        side: Side,
    },
    /// The running occupied count disagrees with the grid contents.
    #[error("occupied count {recorded} does not match {actual} discs on the grid")]
    InconsistentOccupied {
        /// Count stored on the board.
        recorded: u8,
        /// Count found by scanning the grid.
        actual: u8,
    },
}

/// Errors that occur when parsing a board layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A character that is neither a cell nor a separator.
    #[error("invalid layout character: '{character}'")]
    InvalidChar {
        /// The invalid character.
        character: char,
    },
    /// The layout does not describe exactly 64 cells.
    #[error("layout describes {found} cells, expected 64")]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
}
