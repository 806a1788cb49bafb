//! The "weak" opponent: a uniformly random legal move.

use othello_core::{Board, Position, Side};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Picks uniformly among the legal moves of its side.
///
/// Seeded PCG generator, so a given seed always plays the same game against
/// the same opponent.
#[derive(Debug, Clone)]
pub struct RandomMover {
    side: Side,
    rng: Pcg64,
}

impl RandomMover {
    /// Create a random mover for `side`.
    pub fn new(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// The side this mover plays.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Pick a legal move, or `None` when the side has to pass.
    pub fn pick(&mut self, board: &Board) -> Option<Position> {
        let moves = board.legal_moves(self.side);
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.gen_range(0..moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use othello_core::{Board, Side};

    use super::RandomMover;

    #[test]
    fn always_picks_a_legal_move() {
        let board = Board::starting_position();
        let mut mover = RandomMover::new(Side::Dark, 7);
        for _ in 0..32 {
            let mv = mover.pick(&board).unwrap();
            assert!(board.is_legal(mv, Side::Dark));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::starting_position();
        let mut a = RandomMover::new(Side::Light, 42);
        let mut b = RandomMover::new(Side::Light, 42);
        for _ in 0..16 {
            assert_eq!(a.pick(&board), b.pick(&board));
        }
    }

    #[test]
    fn passes_when_stuck() {
        let board: Board = "X".repeat(64).parse().unwrap();
        let mut mover = RandomMover::new(Side::Light, 1);
        assert_eq!(mover.pick(&board), None);
    }
}
