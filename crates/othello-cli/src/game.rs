//! Turn bookkeeping around a [`Board`]: who moves next, forced passes, game end.

use othello_core::{Board, Outcome, Position, Side};

use crate::error::CliError;

/// What happens after a move has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// The opponent moves next.
    ToMove(Side),
    /// `passed` has no legal move, so `to_move` goes again.
    Passed {
        /// The side forced to pass.
        passed: Side,
        /// The side moving again.
        to_move: Side,
    },
    /// Neither side can move, or the board is full.
    GameOver(Outcome),
}

/// A single played move and its consequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Who moved.
    pub side: Side,
    /// Where the disc was placed.
    pub position: Position,
    /// Discs flipped by the move, in capture order.
    pub captured: Vec<Position>,
    /// Turn state after the move.
    pub next: Next,
}

/// A game in progress: the board plus the side to move.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Side,
}

impl Game {
    /// Start a new game, Dark to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            to_move: Side::Dark,
        }
    }

    /// Reset to the opening position.
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Side::Dark;
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Return `true` once neither side can move.
    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Play `pos` for the side to move, then advance the turn.
    ///
    /// # Errors
    ///
    /// [`CliError::GameOver`] after the game has ended, or the board's
    /// [`BoardError`](othello_core::BoardError) for an illegal move.
    pub fn play(&mut self, pos: Position) -> Result<Turn, CliError> {
        if self.is_over() {
            return Err(CliError::GameOver);
        }

        let side = self.to_move;
        let captured = self.board.apply(side, pos)?;
        let next = self.advance(side);

        Ok(Turn {
            side,
            position: pos,
            captured,
            next,
        })
    }

    /// Decide who moves after `mover`, recording it in `to_move`.
    fn advance(&mut self, mover: Side) -> Next {
        if self.board.is_game_over() {
            return Next::GameOver(self.board.winner());
        }

        let opponent = mover.opponent();
        if self.board.has_legal_move(opponent) {
            self.to_move = opponent;
            Next::ToMove(opponent)
        } else {
            self.to_move = mover;
            Next::Passed {
                passed: opponent,
                to_move: mover,
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
