//! Game engine: owns the state and drives the turn loop.

pub mod game;

pub use game::{Game, GamePhase};
