//! Console front-end for the Othello engine.

pub mod command;
pub mod engine;
pub mod error;
pub mod game;

pub use command::{Command, parse_command};
pub use engine::CliEngine;
pub use error::CliError;
pub use game::{Game, Next, Turn};
