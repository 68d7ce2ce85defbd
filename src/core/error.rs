//! Engine errors.
//!
//! Only caller mistakes surface as errors. Moves that break the game rules
//! (wrong turn, empty house, finished game) are reported through
//! `MoveOutcome` instead.

/// Errors returned by the board engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KalahError {
    /// A construction parameter or house index is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the current game state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KalahError>;
