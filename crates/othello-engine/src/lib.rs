//! Search and evaluation for the Othello engine.

pub mod error;
pub mod eval;
pub mod random;
pub mod search;
pub mod strategy;

pub use error::SearchError;
pub use eval::{CornerEdgeEvaluator, Evaluator, evaluate};
pub use random::RandomMover;
pub use search::{MAX_DEPTH, SearchResult, Searcher};
pub use strategy::{Difficulty, Strategy};
