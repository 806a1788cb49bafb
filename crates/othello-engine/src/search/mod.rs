//! Depth-limited game-tree search.

pub mod minimax;

use othello_core::{Board, Position, Side};
use tracing::debug;

use crate::error::SearchError;
use crate::eval::{CornerEdgeEvaluator, Evaluator};
use minimax::{INF, SearchContext, max_node};

/// Deepest search accepted: a game never has more than 60 placements left.
pub const MAX_DEPTH: u8 = 60;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, or `None` when the searching side has to pass.
    pub best_move: Option<Position>,
    /// Minimax score from the searching side's perspective.
    pub score: i32,
    /// Total nodes visited.
    pub nodes: u64,
}

/// Fixed-depth minimax searcher playing one side.
///
/// Every call re-searches from scratch on a private copy of the caller's board.
/// A depth of 0 is accepted: the searcher then returns the static evaluation of
/// the current position and no move.
#[derive(Debug, Clone)]
pub struct Searcher<E = CornerEdgeEvaluator> {
    side: Side,
    depth: u8,
    evaluator: E,
    last_score: i32,
}

impl Searcher {
    /// Create a searcher for `side` with the default evaluator.
    ///
    /// # Errors
    ///
    /// [`SearchError::DepthTooLarge`] if `depth` exceeds [`MAX_DEPTH`].
    pub fn new(side: Side, depth: u8) -> Result<Self, SearchError> {
        Self::with_evaluator(side, depth, CornerEdgeEvaluator)
    }
}

impl<E: Evaluator> Searcher<E> {
    /// Create a searcher that scores leaves with a custom evaluator.
    ///
    /// # Errors
    ///
    /// [`SearchError::DepthTooLarge`] if `depth` exceeds [`MAX_DEPTH`].
    pub fn with_evaluator(side: Side, depth: u8, evaluator: E) -> Result<Self, SearchError> {
        if depth > MAX_DEPTH {
            return Err(SearchError::DepthTooLarge {
                depth,
                max: MAX_DEPTH,
            });
        }
        Ok(Self {
            side,
            depth,
            evaluator,
            last_score: 0,
        })
    }

    /// The side this searcher maximizes for.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Search depth in plies.
    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Search `board` and return the best move for the configured side.
    ///
    /// The caller's board is never mutated.
    pub fn best_move(&mut self, board: &Board) -> SearchResult {
        let snapshot = *board;
        let mut ctx = SearchContext {
            side: self.side,
            evaluator: &self.evaluator,
            nodes: 0,
            best_move: None,
        };

        let score = max_node(&snapshot, self.depth, 0, -INF, INF, &mut ctx);
        let result = SearchResult {
            best_move: ctx.best_move,
            score,
            nodes: ctx.nodes,
        };
        self.last_score = score;

        debug!(
            side = %self.side,
            depth = self.depth,
            score,
            nodes = result.nodes,
            best_move = ?result.best_move,
            "search finished"
        );
        result
    }

    /// Score of the most recent [`best_move`](Self::best_move) call (0 before any).
    #[inline]
    pub fn best_score(&self) -> i32 {
        self.last_score
    }
}
