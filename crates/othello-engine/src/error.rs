//! Search configuration errors.

/// Errors raised when configuring a searcher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The requested depth exceeds the number of plies a game can still have.
    #[error("search depth {depth} exceeds maximum of {max}")]
    DepthTooLarge {
        /// The rejected depth.
        depth: u8,
        /// Largest accepted depth.
        max: u8,
    },
}
