//! Minimax with alpha-beta pruning, as a pair of mutually recursive Max/Min nodes.

use othello_core::{Board, Position, Side};

use crate::eval::Evaluator;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Search state threaded through the Max/Min recursion.
pub(super) struct SearchContext<'a, E: ?Sized> {
    /// The side being maximized; every leaf is scored for it.
    pub side: Side,
    /// Static evaluator used at the horizon and at finished games.
    pub evaluator: &'a E,
    /// Total nodes visited.
    pub nodes: u64,
    /// First root move that reached the best root score.
    pub best_move: Option<Position>,
}

/// Max node: `ctx.side` to move.
///
/// Children are generated copy-make, so `board` is never mutated.
pub(super) fn max_node<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u8,
    ply: u8,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_, E>,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 || board.is_game_over() {
        return ctx.evaluator.evaluate(board, ctx.side);
    }

    let mut best_score = -INF;
    let mut moved = false;

    for pos in Position::all() {
        let Ok(child) = board.make_move(ctx.side, pos) else {
            continue;
        };
        moved = true;

        let score = min_node(&child, depth - 1, ply + 1, alpha, beta, ctx);

        // Strict improvement: ties keep the earliest row-major move.
        if score > best_score {
            best_score = score;
            if ply == 0 {
                ctx.best_move = Some(pos);
            }
        }

        alpha = alpha.max(score);
        if beta <= alpha {
            break;
        }
    }

    // Forced pass: hand the turn over without spending depth.
    if !moved {
        let score = min_node(board, depth, ply + 1, alpha, beta, ctx);
        best_score = best_score.max(score);
    }

    best_score
}

/// Min node: the opponent of `ctx.side` to move.
pub(super) fn min_node<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u8,
    ply: u8,
    alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_, E>,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 || board.is_game_over() {
        return ctx.evaluator.evaluate(board, ctx.side);
    }

    let mover = ctx.side.opponent();
    let mut worst_score = INF;
    let mut moved = false;

    for pos in Position::all() {
        let Ok(child) = board.make_move(mover, pos) else {
            continue;
        };
        moved = true;

        let score = max_node(&child, depth - 1, ply + 1, alpha, beta, ctx);
        worst_score = worst_score.min(score);

        beta = beta.min(score);
        if beta <= alpha {
            break;
        }
    }

    if !moved {
        let score = max_node(board, depth, ply + 1, alpha, beta, ctx);
        worst_score = worst_score.min(score);
    }

    worst_score
}

#[cfg(test)]
mod tests {
    use othello_core::{Board, Position, Side};

    use super::*;
    use crate::eval::{CornerEdgeEvaluator, evaluate};

    fn run(board: &Board, side: Side, depth: u8) -> (i32, Option<Position>, u64) {
        let mut ctx = SearchContext {
            side,
            evaluator: &CornerEdgeEvaluator,
            nodes: 0,
            best_move: None,
        };
        let score = max_node(board, depth, 0, -INF, INF, &mut ctx);
        (score, ctx.best_move, ctx.nodes)
    }

    #[test]
    fn depth_zero_is_static_eval() {
        let board = Board::starting_position();
        let (score, best, nodes) = run(&board, Side::Dark, 0);
        assert_eq!(score, evaluate(&board, Side::Dark));
        assert_eq!(best, None);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn depth_one_takes_best_child() {
        let board = Board::starting_position();
        let (score, best, _) = run(&board, Side::Dark, 1);
        // Every opening leaves dark 4-1 with no region bonus; the first wins ties.
        assert_eq!(score, 3);
        assert_eq!(best, Position::new(2, 3));
    }

    #[test]
    fn finished_game_scores_statically() {
        let board: Board = "X".repeat(64).parse().unwrap();
        let (score, best, nodes) = run(&board, Side::Light, 4);
        assert_eq!(score, evaluate(&board, Side::Light));
        assert_eq!(best, None);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn root_pass_reports_no_move() {
        // Dark is stuck, light still has a capture.
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
        let (score, best, _) = run(&board, Side::Dark, 2);
        assert_eq!(best, None);
        // Light captures a2 from a3 and dark has nothing left.
        let after = board.make_move(Side::Light, Position::new(2, 0).unwrap()).unwrap();
        assert_eq!(score, evaluate(&after, Side::Dark));
    }
}
