//! Text layout parsing and serialization for [`Board`].
//!
//! A layout lists the 64 cells in row-major order. `.` or `-` is empty, `X`/`B`
//! is Dark and `O`/`W` is Light. Whitespace and `/` are ignored, so both a
//! single line and an indented 8-line block parse.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::LayoutError;
use crate::position::Position;

/// Layout string for the standard starting position.
pub const STARTING_LAYOUT: &str =
    "......../......../......../...OX.../...XO.../......../......../........";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let mut cells = [Cell::Empty; Position::COUNT];
        let mut count = 0usize;

        for c in layout.chars() {
            if c.is_whitespace() || c == '/' {
                continue;
            }
            let cell = Cell::from_layout_char(c).ok_or(LayoutError::InvalidChar { character: c })?;
            if count < Position::COUNT {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != Position::COUNT {
            return Err(LayoutError::WrongCellCount { found: count });
        }

        Ok(Board::from_cells(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::all() {
            if pos.index() > 0 && pos.col() == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", self.cell_at(pos))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_LAYOUT;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::error::LayoutError;
    use crate::position::Position;

    #[test]
    fn starting_layout_matches_starting_position() {
        let board: Board = STARTING_LAYOUT.parse().unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(board.to_string(), STARTING_LAYOUT);
    }

    #[test]
    fn block_layout_with_original_letters() {
        let board: Board = "
            B.......
            .W......
            ........
            ........
            ........
            ........
            ........
            .......-"
            .parse()
            .unwrap();
        assert_eq!(board.cell_at(Position::new(0, 0).unwrap()), Cell::Dark);
        assert_eq!(board.cell_at(Position::new(1, 1).unwrap()), Cell::Light);
        assert_eq!(board.occupied_count(), 2);
        board.validate().unwrap();
    }

    #[test]
    fn too_few_cells() {
        let err = "XO".parse::<Board>().unwrap_err();
        assert_eq!(err, LayoutError::WrongCellCount { found: 2 });
    }

    #[test]
    fn too_many_cells() {
        let layout = ".".repeat(65);
        let err = layout.parse::<Board>().unwrap_err();
        assert_eq!(err, LayoutError::WrongCellCount { found: 65 });
    }

    #[test]
    fn bad_character() {
        let layout = ".".repeat(63) + "Q";
        let err = layout.parse::<Board>().unwrap_err();
        assert_eq!(err, LayoutError::InvalidChar { character: 'Q' });
    }

    #[test]
    fn debug_wraps_layout() {
        let board = Board::starting_position();
        assert_eq!(format!("{board:?}"), format!("Board(\"{STARTING_LAYOUT}\")"));
    }
}
