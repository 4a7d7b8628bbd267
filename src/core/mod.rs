//! Core types: positions, directions, configuration, errors, RNG.
//!
//! These are shared by every other module and carry no game logic of
//! their own.

pub mod position;
pub mod direction;
pub mod config;
pub mod error;
pub mod rng;

pub use position::Position;
pub use direction::Direction;
pub use config::{GameConfig, KindShare};
pub use error::{GameError, Result};
pub use rng::{GameRng, RandomSource, DIE_FACES};
