//! Console command parsing.

use othello_core::{Position, Side};
use othello_engine::Difficulty;

use crate::error::CliError;

/// A parsed console command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `newgame` -- reset the board, Dark to move.
    NewGame,
    /// `level weak|easy|hard` -- computer strength.
    Level(Difficulty),
    /// `human dark|light|none` -- which side the human plays.
    Human(Option<Side>),
    /// `play <pos>` -- a human move for the side to move.
    Play(Position),
    /// `go` -- let the computer move for the side to move.
    Go,
    /// `moves` -- list legal moves.
    Moves,
    /// `show` -- print the board.
    Show,
    /// `perft <depth>` -- count game-tree leaves from the current position.
    Perft(usize),
    /// `quit` -- exit.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "newgame" => Ok(Command::NewGame),
        "go" => Ok(Command::Go),
        "moves" => Ok(Command::Moves),
        "show" => Ok(Command::Show),
        "quit" => Ok(Command::Quit),
        "level" => parse_level(&tokens[1..]),
        "human" => parse_human(&tokens[1..]),
        "play" => parse_position(&tokens[1..]).map(Command::Play),
        "perft" => parse_perft(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

fn parse_level(tokens: &[&str]) -> Result<Command, CliError> {
    let value = tokens
        .first()
        .ok_or(CliError::MissingArgument { command: "level" })?;
    Difficulty::from_name(value)
        .map(Command::Level)
        .ok_or_else(|| CliError::UnknownLevel {
            value: value.to_string(),
        })
}

fn parse_human(tokens: &[&str]) -> Result<Command, CliError> {
    let value = tokens
        .first()
        .ok_or(CliError::MissingArgument { command: "human" })?;
    if value.eq_ignore_ascii_case("none") {
        return Ok(Command::Human(None));
    }
    Side::from_name(value)
        .map(|side| Command::Human(Some(side)))
        .ok_or_else(|| CliError::UnknownSide {
            value: value.to_string(),
        })
}

/// Parse `d3` or `row col` (zero-based) into a position.
fn parse_position(tokens: &[&str]) -> Result<Position, CliError> {
    let invalid = || CliError::InvalidPosition {
        input: tokens.join(" "),
    };

    match tokens {
        [] => Err(CliError::MissingArgument { command: "play" }),
        [square] => Position::from_algebraic(square).ok_or_else(invalid),
        [row, col] => {
            let row: i32 = row.parse().map_err(|_| invalid())?;
            let col: i32 = col.parse().map_err(|_| invalid())?;
            Position::new(row, col).ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}

fn parse_perft(tokens: &[&str]) -> Result<Command, CliError> {
    let value = tokens
        .first()
        .ok_or(CliError::MissingArgument { command: "perft" })?;
    value
        .parse()
        .map(Command::Perft)
        .map_err(|_| CliError::InvalidDepth {
            value: value.to_string(),
        })
}
