//! Console protocol errors.

use othello_core::{BoardError, Side};
use othello_engine::SearchError;

/// Errors that can occur while handling console commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command was given without its required argument.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command missing its argument.
        command: &'static str,
    },

    /// A position argument is not `d3`-style or `row col` on the board.
    #[error("invalid position: {input}")]
    InvalidPosition {
        /// The text that failed to parse.
        input: String,
    },

    /// The `level` argument is not a known difficulty.
    #[error("unknown level: {value}")]
    UnknownLevel {
        /// The rejected level name.
        value: String,
    },

    /// The `human` argument is not `dark`, `light` or `none`.
    #[error("unknown side: {value}")]
    UnknownSide {
        /// The rejected side name.
        value: String,
    },

    /// The `perft` depth could not be parsed.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// The `perft` depth is above the supported maximum.
    #[error("perft depth {depth} exceeds maximum of {max}")]
    PerftTooDeep {
        /// The requested depth.
        depth: usize,
        /// The largest depth accepted.
        max: usize,
    },

    /// A human move was entered while the computer is to move.
    #[error("not your turn: {side} is played by the computer")]
    NotYourTurn {
        /// The side to move.
        side: Side,
    },

    /// A computer move is still being searched.
    #[error("search in progress")]
    Busy,

    /// The game has already ended.
    #[error("game is over")]
    GameOver,

    /// The board rejected the move.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The computer player could not be configured.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
