//! Move-selection strategies and the difficulty levels that choose between them.

use std::fmt;

use othello_core::{Board, Position, Side};

use crate::error::SearchError;
use crate::eval::Evaluator;
use crate::random::RandomMover;
use crate::search::Searcher;

/// Anything that can pick a move for its side.
pub trait Strategy {
    /// The side this strategy plays.
    fn side(&self) -> Side;

    /// Pick a move for [`side()`](Self::side) on `board`, or `None` to pass.
    fn choose_move(&mut self, board: &Board) -> Option<Position>;
}

impl<E: Evaluator> Strategy for Searcher<E> {
    fn side(&self) -> Side {
        Searcher::<E>::side(self)
    }

    fn choose_move(&mut self, board: &Board) -> Option<Position> {
        self.best_move(board).best_move
    }
}

impl Strategy for RandomMover {
    fn side(&self) -> Side {
        RandomMover::side(self)
    }

    fn choose_move(&mut self, board: &Board) -> Option<Position> {
        self.pick(board)
    }
}

/// Computer opponent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Random legal moves.
    Weak,
    /// Three-ply search.
    #[default]
    Easy,
    /// Five-ply search.
    Hard,
}

impl Difficulty {
    /// Search depth for this level, or `None` for random play.
    pub const fn depth(self) -> Option<u8> {
        match self {
            Difficulty::Weak => None,
            Difficulty::Easy => Some(3),
            Difficulty::Hard => Some(5),
        }
    }

    /// Parse a level name.
    pub fn from_name(s: &str) -> Option<Difficulty> {
        match s.to_ascii_lowercase().as_str() {
            "weak" | "random" => Some(Difficulty::Weak),
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Build the strategy for this level playing `side`. `seed` feeds random play.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError`] from searcher construction.
    pub fn strategy(self, side: Side, seed: u64) -> Result<Box<dyn Strategy + Send>, SearchError> {
        match self.depth() {
            Some(depth) => Ok(Box::new(Searcher::new(side, depth)?)),
            None => Ok(Box::new(RandomMover::new(side, seed))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Weak => write!(f, "weak"),
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use othello_core::{Board, Side};

    use super::{Difficulty, Strategy};

    #[test]
    fn depths() {
        assert_eq!(Difficulty::Weak.depth(), None);
        assert_eq!(Difficulty::Easy.depth(), Some(3));
        assert_eq!(Difficulty::Hard.depth(), Some(5));
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn names_roundtrip() {
        for level in [Difficulty::Weak, Difficulty::Easy, Difficulty::Hard] {
            assert_eq!(Difficulty::from_name(&level.to_string()), Some(level));
        }
        assert_eq!(Difficulty::from_name("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name("expert"), None);
    }

    #[test]
    fn every_level_plays_a_legal_move() {
        let board = Board::starting_position();
        for level in [Difficulty::Weak, Difficulty::Easy, Difficulty::Hard] {
            let mut strategy: Box<dyn Strategy + Send> = level.strategy(Side::Dark, 3).unwrap();
            assert_eq!(strategy.side(), Side::Dark);
            let mv = strategy.choose_move(&board).unwrap();
            assert!(board.is_legal(mv, Side::Dark), "{level} chose {mv}");
        }
    }
}
