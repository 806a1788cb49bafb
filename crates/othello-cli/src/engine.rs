//! Event-driven console engine.
//!
//! A reader thread turns stdin lines into commands; computer moves are searched
//! on a worker thread and come back as events, so input stays responsive while
//! the engine thinks.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use othello_core::perft::perft;
use othello_core::{Board, Position, Side};
use othello_engine::{Difficulty, Strategy};

use crate::command::{Command, parse_command};
use crate::error::CliError;
use crate::game::{Game, Next, Turn};

/// Deepest `perft` the console accepts.
const MAX_PERFT_DEPTH: usize = 9;

/// Configuration knobs adjustable via `level` and `human`.
#[derive(Debug, Clone, Copy)]
struct EngineConfig {
    /// Strength of the computer player.
    difficulty: Difficulty,
    /// Side played from the console; `None` lets the computer play both sides.
    human: Option<Side>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            human: Some(Side::Dark),
        }
    }
}

/// Whether a computer move is being searched.
enum EngineState {
    Idle,
    Thinking,
}

/// Events processed by the main engine loop.
enum EngineEvent {
    Command(Result<Command, CliError>),
    SearchDone(SearchDone),
    InputError(io::Error),
    InputClosed,
}

/// Payload returned by the search thread when it finishes.
struct SearchDone {
    side: Side,
    best_move: Option<Position>,
    elapsed: Duration,
}

/// The console engine, holding the game in progress and the player configuration.
pub struct CliEngine {
    game: Game,
    state: EngineState,
    config: EngineConfig,
    seed: u64,
}

impl CliEngine {
    /// Create a new engine with a fresh game.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self {
            game: Game::new(),
            state: EngineState::Idle,
            config: EngineConfig::default(),
            seed,
        }
    }

    /// Run the event loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), CliError> {
        let (tx, rx) = mpsc::channel::<EngineEvent>();

        let stdin_tx = tx.clone();
        std::thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        debug!(cmd = %trimmed, "received command");
                        if stdin_tx
                            .send(EngineEvent::Command(parse_command(trimmed)))
                            .is_err()
                        {
                            return;
                        }
                    }
                    Err(e) => {
                        let _ = stdin_tx.send(EngineEvent::InputError(e));
                        return;
                    }
                }
            }
            let _ = stdin_tx.send(EngineEvent::InputClosed);
        });

        println!("{}", self.game.board().pretty());

        for event in &rx {
            match event {
                EngineEvent::Command(Ok(Command::Quit)) | EngineEvent::InputClosed => {
                    self.wait_for_search(&rx);
                    break;
                }
                EngineEvent::Command(Ok(cmd)) => {
                    if let Err(e) = self.handle(cmd, &tx) {
                        report(&e);
                    }
                }
                EngineEvent::Command(Err(e)) => report(&e),
                EngineEvent::SearchDone(done) => self.on_search_done(done, &tx),
                EngineEvent::InputError(source) => {
                    self.wait_for_search(&rx);
                    return Err(CliError::Io { source });
                }
            }
        }

        info!("othello shutting down");
        Ok(())
    }

    fn handle(&mut self, cmd: Command, tx: &mpsc::Sender<EngineEvent>) -> Result<(), CliError> {
        match cmd {
            Command::NewGame => {
                self.ensure_idle()?;
                self.game.reset();
                println!("{}", self.game.board().pretty());
                self.maybe_start_computer(tx);
            }
            Command::Level(difficulty) => {
                debug!(%difficulty, "level changed");
                self.config.difficulty = difficulty;
            }
            Command::Human(human) => {
                debug!(?human, "human side changed");
                self.config.human = human;
                self.maybe_start_computer(tx);
            }
            Command::Play(pos) => {
                self.ensure_idle()?;
                let side = self.game.to_move();
                if self.computer_plays(side) {
                    return Err(CliError::NotYourTurn { side });
                }
                let turn = self.game.play(pos)?;
                emit_turn(&turn, self.game.board());
                self.maybe_start_computer(tx);
            }
            Command::Go => {
                self.ensure_idle()?;
                if self.game.is_over() {
                    return Err(CliError::GameOver);
                }
                self.start_search(tx)?;
            }
            Command::Moves => {
                let moves = self.game.board().legal_moves(self.game.to_move());
                println!("{}", format_moves(self.game.to_move(), &moves));
            }
            Command::Show => {
                println!("{}", self.game.board().pretty());
                println!("to move {}", self.game.to_move());
            }
            Command::Perft(depth) => {
                if depth > MAX_PERFT_DEPTH {
                    return Err(CliError::PerftTooDeep {
                        depth,
                        max: MAX_PERFT_DEPTH,
                    });
                }
                let start = Instant::now();
                let nodes = perft(self.game.board(), self.game.to_move(), depth);
                info!(depth, nodes, elapsed_ms = start.elapsed().as_millis() as u64, "perft");
                println!("perft {depth} {nodes}");
            }
            Command::Unknown(word) => debug!(%word, "ignoring unknown command"),
            Command::Quit => {}
        }
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), CliError> {
        match self.state {
            EngineState::Idle => Ok(()),
            EngineState::Thinking => Err(CliError::Busy),
        }
    }

    /// Return `true` if `side` is not the human's side.
    fn computer_plays(&self, side: Side) -> bool {
        self.config.human != Some(side)
    }

    /// Start a search when the side to move belongs to the computer.
    fn maybe_start_computer(&mut self, tx: &mpsc::Sender<EngineEvent>) {
        if !matches!(self.state, EngineState::Idle) || self.game.is_over() {
            return;
        }
        if self.computer_plays(self.game.to_move()) {
            if let Err(e) = self.start_search(tx) {
                report(&e);
            }
        }
    }

    fn on_search_done(&mut self, done: SearchDone, tx: &mpsc::Sender<EngineEvent>) {
        self.finish_search(done);
        self.maybe_start_computer(tx);
    }

    fn start_search(&mut self, tx: &mpsc::Sender<EngineEvent>) -> Result<(), CliError> {
        let side = self.game.to_move();
        self.seed = self.seed.wrapping_add(1);
        let mut strategy: Box<dyn Strategy + Send> =
            self.config.difficulty.strategy(side, self.seed)?;

        info!(%side, difficulty = %self.config.difficulty, "computer thinking");

        let board: Board = *self.game.board();
        let tx = tx.clone();
        std::thread::spawn(move || {
            let start = Instant::now();
            let best_move = strategy.choose_move(&board);
            let _ = tx.send(EngineEvent::SearchDone(SearchDone {
                side,
                best_move,
                elapsed: start.elapsed(),
            }));
        });

        self.state = EngineState::Thinking;
        Ok(())
    }

    fn finish_search(&mut self, done: SearchDone) {
        self.state = EngineState::Idle;
        info!(
            side = %done.side,
            best_move = ?done.best_move,
            elapsed_ms = done.elapsed.as_millis() as u64,
            "computer move ready"
        );

        let Some(mv) = done.best_move else {
            warn!(side = %done.side, "computer found no move");
            println!("pass {}", done.side);
            return;
        };

        match self.game.play(mv) {
            Ok(turn) => emit_turn(&turn, self.game.board()),
            Err(e) => report(&e),
        }
    }

    /// Block until an in-flight search reports back, then record its move.
    fn wait_for_search(&mut self, rx: &mpsc::Receiver<EngineEvent>) {
        if matches!(self.state, EngineState::Idle) {
            return;
        }
        for event in rx {
            if let EngineEvent::SearchDone(done) = event {
                self.finish_search(done);
                break;
            }
        }
    }
}

impl Default for CliEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn report(e: &CliError) {
    warn!(error = %e, "command failed");
    println!("error {e}");
}

fn emit_turn(turn: &Turn, board: &Board) {
    for line in format_turn(turn, board) {
        println!("{line}");
    }
}

/// Render a played move and its aftermath as protocol lines.
fn format_turn(turn: &Turn, board: &Board) -> Vec<String> {
    let captured: Vec<String> = turn.captured.iter().map(Position::to_string).collect();
    let mut lines = vec![format!(
        "move {} {} captures {}",
        turn.side,
        turn.position,
        captured.join(" ")
    )];

    match turn.next {
        Next::ToMove(_) => {}
        Next::Passed { passed, .. } => lines.push(format!("pass {passed}")),
        Next::GameOver(outcome) => lines.push(format!(
            "gameover {outcome} {}-{}",
            board.score(Side::Dark),
            board.score(Side::Light)
        )),
    }
    lines
}

/// Render the legal move list for `side`.
fn format_moves(side: Side, moves: &[Position]) -> String {
    if moves.is_empty() {
        return format!("moves {side} none");
    }
    let list: Vec<String> = moves.iter().map(Position::to_string).collect();
    format!("moves {side} {}", list.join(" "))
}
