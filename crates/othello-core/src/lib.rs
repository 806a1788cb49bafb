//! Core Othello types: board representation, move legality and capture rules.

mod board;
mod cell;
mod direction;
mod error;
mod layout;
mod position;
mod rules;
mod side;

pub mod perft;

pub use board::{Board, Outcome, PrettyBoard};
pub use cell::Cell;
pub use direction::Direction;
pub use error::{BoardError, LayoutError};
pub use layout::STARTING_LAYOUT;
pub use position::Position;
pub use side::Side;
