//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::side::Side;

/// Count the leaf nodes of the game tree `depth` plies below `board`, `side` to move.
///
/// A forced pass consumes a ply. A finished game is a leaf regardless of the
/// remaining depth.
pub fn perft(board: &Board, side: Side, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(side);

    if moves.is_empty() {
        if board.has_legal_move(side.opponent()) {
            return perft(board, side.opponent(), depth - 1);
        }
        return 1;
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        if let Ok(child) = board.make_move(side, mv) {
            nodes += perft(&child, side.opponent(), depth - 1);
        }
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs in row-major move order.
pub fn divide(board: &Board, side: Side, depth: usize) -> Vec<(String, u64)> {
    board
        .legal_moves(side)
        .into_iter()
        .filter_map(|mv| {
            let child = board.make_move(side, mv).ok()?;
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, side.opponent(), depth - 1)
            };
            Some((mv.to_string(), count))
        })
        .collect()
}
