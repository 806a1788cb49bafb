//! Static position evaluation.
//!
//! The search never scores a position itself; it asks an [`Evaluator`]. The
//! shipped evaluator is [`CornerEdgeEvaluator`], a fast non-adaptive sum of disc
//! differential and region bonuses.

pub mod regions;

use othello_core::{Board, Side};

use regions::{corner_bonus, edge_bonus};

/// Scores a position from the point of view of one side.
///
/// Higher is better for `side`. Implementations must be pure: the same board
/// and side always produce the same score.
pub trait Evaluator {
    /// Evaluate `board` for `side`.
    fn evaluate(&self, board: &Board, side: Side) -> i32;
}

/// Disc differential plus corner and edge bonuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CornerEdgeEvaluator;

impl Evaluator for CornerEdgeEvaluator {
    #[inline]
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        evaluate(board, side)
    }
}

/// Evaluate `board` for `side` with the default weights.
///
/// Returns `own discs - opponent discs + corner bonus + edge bonus`, where both
/// bonuses only count cells owned by `side`.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let own = board.score(side) as i32;
    let theirs = board.score(side.opponent()) as i32;
    (own - theirs) + corner_bonus(board, side) + edge_bonus(board, side)
}

#[cfg(test)]
mod tests {
    use othello_core::{Board, Position, Side};

    use super::{CornerEdgeEvaluator, Evaluator, evaluate};
    use crate::eval::regions::{CORNER_WEIGHT, EDGE_WEIGHT};

    #[test]
    fn starting_position_is_zero() {
        let board = Board::starting_position();
        assert_eq!(evaluate(&board, Side::Dark), 0);
        assert_eq!(evaluate(&board, Side::Light), 0);
    }

    #[test]
    fn disc_differential_after_opening() {
        let board = Board::starting_position()
            .make_move(Side::Dark, Position::from_algebraic("d3").unwrap())
            .unwrap();
        assert_eq!(evaluate(&board, Side::Dark), 3);
        assert_eq!(evaluate(&board, Side::Light), -3);
    }

    #[test]
    fn owned_corner_scores_corner_and_two_edges() {
        let board: Board = "
            X.......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert_eq!(evaluate(&board, Side::Dark), 1 + CORNER_WEIGHT + 2 * EDGE_WEIGHT);
        // The opponent's corner earns Light nothing beyond the differential.
        assert_eq!(evaluate(&board, Side::Light), -1);
    }

    #[test]
    fn edge_cell_scores_once() {
        let board: Board = "
            ...O....
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert_eq!(evaluate(&board, Side::Light), 1 + EDGE_WEIGHT);
    }

    #[test]
    fn trait_matches_free_function() {
        let board: Board = "
            XO......
            OX......
            ........
            ...XO...
            ...OX...
            ........
            ........
            .......O"
            .parse()
            .unwrap();
        for side in Side::ALL {
            assert_eq!(CornerEdgeEvaluator.evaluate(&board, side), evaluate(&board, side));
        }
    }
}
