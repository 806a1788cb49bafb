//! Move legality, capture resolution and the narrow search undo.

use crate::board::Board;
use crate::cell::Cell;
use crate::direction::Direction;
use crate::error::BoardError;
use crate::position::Position;
use crate::side::Side;

impl Board {
    /// Length of the opponent run that a `side` disc on `from` would bracket in `dir`.
    ///
    /// Walks from one step past `from`: opponent discs extend the run, a `side`
    /// disc closes it, an empty cell or the edge voids it. Returns 0 when nothing
    /// is captured. Both legality and application go through this walk.
    fn flank(&self, side: Side, from: Position, dir: Direction) -> usize {
        let own = Cell::from(side);
        let theirs = Cell::from(side.opponent());
        let mut run = 0;
        let mut cursor = from.step(dir);

        while let Some(pos) = cursor {
            let cell = self.cell_at(pos);
            if cell == theirs {
                run += 1;
            } else if cell == own {
                return run;
            } else {
                return 0;
            }
            cursor = pos.step(dir);
        }
        0
    }

    /// Return `true` if a `side` disc on `pos` would flip at least one disc along `dir`.
    #[inline]
    pub fn captures_in_direction(&self, side: Side, pos: Position, dir: Direction) -> bool {
        self.flank(side, pos, dir) > 0
    }

    /// Return `true` if `side` may place a disc on `pos`.
    ///
    /// The cell must be empty and the placement must bracket an opponent run in
    /// at least one direction. Has no side effects.
    pub fn is_legal(&self, pos: Position, side: Side) -> bool {
        self.cell_at(pos).is_empty()
            && Direction::ALL
                .into_iter()
                .any(|dir| self.captures_in_direction(side, pos, dir))
    }

    /// Legality over raw coordinates. Anything off the board is simply illegal.
    pub fn is_legal_coords(&self, row: i32, col: i32, side: Side) -> bool {
        Position::new(row, col).is_some_and(|pos| self.is_legal(pos, side))
    }

    /// Place a `side` disc on `pos` and flip every bracketed opponent run.
    ///
    /// Returns the flipped positions in direction scan order, then walk order.
    /// The occupied count grows by exactly one; flipped discs were already counted.
    ///
    /// # Errors
    ///
    /// [`BoardError::IllegalMove`] if the cell is occupied or nothing would be
    /// captured. The board is left untouched in that case.
    pub fn apply(&mut self, side: Side, pos: Position) -> Result<Vec<Position>, BoardError> {
        if !self.is_legal(pos, side) {
            return Err(BoardError::IllegalMove { position: pos, side });
        }

        let own = Cell::from(side);
        self.set_cell(pos, own);
        self.bump_occupied(1);

        let mut captured = Vec::new();
        for dir in Direction::ALL {
            let run = self.flank(side, pos, dir);
            let mut cursor = pos;
            for _ in 0..run {
                // flank() already walked these cells, so each step stays on the board.
                let Some(next) = cursor.step(dir) else { break };
                self.set_cell(next, own);
                captured.push(next);
                cursor = next;
            }
        }

        Ok(captured)
    }

    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// # Errors
    ///
    /// Same as [`Board::apply`].
    pub fn make_move(&self, side: Side, pos: Position) -> Result<Board, BoardError> {
        let mut child = *self;
        child.apply(side, pos)?;
        Ok(child)
    }

    /// Clear `pos` and release its occupied slot, if it holds a disc.
    ///
    /// Discs flipped by the placement are NOT restored, so this is only an
    /// inverse of [`Board::apply`] for occupancy, never for captures.
    pub fn undo(&mut self, pos: Position) {
        if !self.cell_at(pos).is_empty() {
            self.set_cell(pos, Cell::Empty);
            self.bump_occupied(-1);
        }
    }
}
