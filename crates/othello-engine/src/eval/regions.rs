//! Corner and edge bonuses.

use othello_core::{Board, Cell, Position, Side};

/// Bonus for each corner owned.
pub const CORNER_WEIGHT: i32 = 25;

/// Bonus for each owned cell on an edge line.
pub const EDGE_WEIGHT: i32 = 5;

/// Sum of [`CORNER_WEIGHT`] over the corners `side` owns.
pub fn corner_bonus(board: &Board, side: Side) -> i32 {
    let own = Cell::from(side);
    Position::all()
        .filter(|pos| pos.is_corner())
        .filter(|&pos| board.cell_at(pos) == own)
        .count() as i32
        * CORNER_WEIGHT
}

/// Sum of [`EDGE_WEIGHT`] over owned cells of rows 0 and 7 and columns 0 and 7.
///
/// Each of the four edge lines is scanned separately, so a corner, which lies
/// on two lines, earns the bonus twice.
pub fn edge_bonus(board: &Board, side: Side) -> i32 {
    let own = Cell::from(side);
    let mut score = 0;
    for i in 0..Position::EXTENT {
        for (row, col) in [(0, i), (7, i), (i, 0), (i, 7)] {
            if Position::new(row, col).is_some_and(|pos| board.cell_at(pos) == own) {
                score += EDGE_WEIGHT;
            }
        }
    }
    score
}
