//! Error types for game construction and play.

use thiserror::Error;

/// Errors surfaced by the simulation.
///
/// Nothing inside the engine recovers from these; callers decide whether
/// to rebuild the game or give up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Invalid constructor input (too few characters, no kind to allocate).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Operation not valid in the current game state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl GameError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
