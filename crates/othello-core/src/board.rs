//! The 8x8 grid: cell contents, occupied count, scoring and game-end detection.

use std::fmt;

use crate::cell::Cell;
use crate::error::BoardError;
use crate::position::Position;
use crate::side::Side;

/// Final result of a game (or the current leader of a position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side with strictly more discs.
    Winner(Side),
    /// Both sides hold the same number of discs.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "winner {side}"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Complete Othello position state.
///
/// Whose turn it is lives with the caller; every query and mutation names the
/// side explicitly.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Cell contents, indexed by [`Position::index()`].
    cells: [Cell; Position::COUNT],
    /// Number of non-empty cells, maintained incrementally.
    occupied: u8,
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 8;

    /// Return the standard starting position.
    ///
    /// Light on (3,3) and (4,4), Dark on (3,4) and (4,3).
    pub fn starting_position() -> Board {
        let mut cells = [Cell::Empty; Position::COUNT];
        cells[3 * 8 + 3] = Cell::Light;
        cells[3 * 8 + 4] = Cell::Dark;
        cells[4 * 8 + 3] = Cell::Dark;
        cells[4 * 8 + 4] = Cell::Light;
        Board { cells, occupied: 4 }
    }

    /// Construct a board from raw cells, counting occupancy once. Used by layout parsing.
    pub(crate) fn from_cells(cells: [Cell; Position::COUNT]) -> Board {
        let occupied = cells.iter().filter(|c| !c.is_empty()).count() as u8;
        Board { cells, occupied }
    }

    /// Put the board back into the starting position.
    pub fn reset(&mut self) {
        *self = Board::starting_position();
    }

    /// Return the contents of the given cell.
    #[inline]
    pub fn cell_at(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Overwrite a cell without touching the occupied count.
    #[inline]
    pub(crate) fn set_cell(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Adjust the occupied count by one placement (`+1`) or removal (`-1`).
    #[inline]
    pub(crate) fn bump_occupied(&mut self, delta: i8) {
        self.occupied = self.occupied.wrapping_add_signed(delta);
    }

    /// Return the number of occupied cells.
    #[inline]
    pub fn occupied_count(&self) -> u8 {
        self.occupied
    }

    /// Return `true` once all 64 cells hold a disc.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied as usize == Position::COUNT
    }

    /// Count the discs belonging to `side` by scanning the grid.
    pub fn score(&self, side: Side) -> u32 {
        self.cells.iter().filter(|c| c.side() == Some(side)).count() as u32
    }

    /// Return the side with more discs, or [`Outcome::Draw`] on equal counts.
    pub fn winner(&self) -> Outcome {
        let dark = self.score(Side::Dark);
        let light = self.score(Side::Light);
        match dark.cmp(&light) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::Dark),
            std::cmp::Ordering::Less => Outcome::Winner(Side::Light),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Return every legal placement for `side`, in row-major order.
    pub fn legal_moves(&self, side: Side) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_legal(pos, side)).collect()
    }

    /// Return `true` if `side` has at least one legal placement.
    pub fn has_legal_move(&self, side: Side) -> bool {
        Position::all().any(|pos| self.is_legal(pos, side))
    }

    /// Return `true` when the board is full or neither side can move.
    pub fn is_game_over(&self) -> bool {
        if self.is_full() {
            return true;
        }
        !self.has_legal_move(Side::Dark) && !self.has_legal_move(Side::Light)
    }

    /// Check that the running occupied count matches the grid.
    pub fn validate(&self) -> Result<(), BoardError> {
        let actual = self.cells.iter().filter(|c| !c.is_empty()).count() as u8;
        if actual != self.occupied {
            return Err(BoardError::InconsistentOccupied {
                recorded: self.occupied,
                actual,
            });
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a labelled 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "   a b c d e f g h")?;
        for row in 0..Position::EXTENT {
            write!(f, "{}  ", row + 1)?;
            for col in 0..Position::EXTENT {
                let c = Position::new(row, col)
                    .map(|pos| board.cell_at(pos).layout_char())
                    .unwrap_or(' ');
                if col < Position::EXTENT - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(
            f,
            "X {}  O {}",
            board.score(Side::Dark),
            board.score(Side::Light)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Outcome};
    use crate::cell::Cell;
    use crate::error::BoardError;
    use crate::position::Position;
    use crate::side::Side;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.occupied_count(), 4);
        assert_eq!(board.cell_at(pos(3, 3)), Cell::Light);
        assert_eq!(board.cell_at(pos(4, 4)), Cell::Light);
        assert_eq!(board.cell_at(pos(3, 4)), Cell::Dark);
        assert_eq!(board.cell_at(pos(4, 3)), Cell::Dark);
        assert_eq!(board.cell_at(pos(0, 0)), Cell::Empty);
        board.validate().unwrap();
    }

    #[test]
    fn starting_scores() {
        let board = Board::starting_position();
        assert_eq!(board.score(Side::Dark), 2);
        assert_eq!(board.score(Side::Light), 2);
        assert_eq!(board.winner(), Outcome::Draw);
        assert!(!board.is_full());
        assert!(!board.is_game_over());
    }

    #[test]
    fn reset_restores_start() {
        let mut board = Board::starting_position();
        board.apply(Side::Dark, pos(2, 3)).unwrap();
        assert_ne!(board, Board::starting_position());
        board.reset();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn full_board_is_game_over() {
        let layout = "XXXXXXXX/".repeat(4) + &"OOOOOOOO/".repeat(4);
        let board: Board = layout.parse().unwrap();
        assert!(board.is_full());
        assert!(board.is_game_over());
        assert_eq!(board.winner(), Outcome::Draw);
    }

    #[test]
    fn stalled_board_is_game_over() {
        // Only dark discs remain: neither side can bracket anything.
        let board: Board = "
            XX......
            X.......
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(!board.is_full());
        assert!(!board.has_legal_move(Side::Dark));
        assert!(!board.has_legal_move(Side::Light));
        assert!(board.is_game_over());
        assert_eq!(board.winner(), Outcome::Winner(Side::Dark));
    }

    #[test]
    fn one_side_stuck_is_not_game_over() {
        // Light can capture the dark disc at a2; dark has nowhere to go.
        let board: Board = "
            O.......
            X.......
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(!board.has_legal_move(Side::Dark));
        assert!(board.has_legal_move(Side::Light));
        assert!(!board.is_game_over());
    }

    #[test]
    fn winner_counts_discs() {
        let board: Board = "
            OOO.....
            X.......
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert_eq!(board.winner(), Outcome::Winner(Side::Light));
    }

    #[test]
    fn validate_catches_bad_count() {
        let mut board = Board::starting_position();
        board.bump_occupied(1);
        assert_eq!(
            board.validate(),
            Err(BoardError::InconsistentOccupied { recorded: 5, actual: 4 })
        );
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.contains("a b c d e f g h"));
        assert!(output.contains("4  . . . O X . . ."));
        assert!(output.contains("5  . . . X O . . ."));
        assert!(output.ends_with("X 2  O 2"));
    }

    #[test]
    fn outcome_display() {
        assert_eq!(format!("{}", Outcome::Winner(Side::Light)), "winner light");
        assert_eq!(format!("{}", Outcome::Draw), "draw");
    }
}
