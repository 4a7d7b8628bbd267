//! # circle-battle
//!
//! A turn-based battle among N characters sitting in a fixed circle,
//! fought until exactly one is left alive.
//!
//! ## Design Principles
//!
//! 1. **Kind-Agnostic**: The engine talks to characters only through the
//!    `Character` capability. Knights and witches are just the default kinds.
//!
//! 2. **Stable Positions**: Dead characters keep their slot so that
//!    clockwise and counter-clockwise always mean the same thing.
//!
//! 3. **Reproducible**: All randomness comes from an injected
//!    `RandomSource`. Same seed and config, same chronicle.
//!
//! ## Example
//!
//! ```
//! use circle_battle::{Game, GameConfig};
//!
//! let config = GameConfig::knights_and_witches(8, 25.0);
//! let mut game = Game::with_seed(config, 42).unwrap();
//!
//! let winner = game.play().unwrap().name().to_string();
//! assert!(game.is_finished());
//! assert_eq!(game.winner().unwrap().name(), winner);
//! ```
//!
//! ## Modules
//!
//! - `core`: Positions, directions, configuration, errors, RNG
//! - `characters`: Character capability and the standard kinds
//! - `roster`: Ratio allocation and the fixed-size roster
//! - `navigation`: Neighbor lookup around the circle
//! - `combat`: Single-attack resolution
//! - `chronicle`: Append-only turn log
//! - `engine`: The game state machine

pub mod core;
pub mod characters;
pub mod roster;
pub mod navigation;
pub mod combat;
pub mod chronicle;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameError, GameRng, KindShare, Position, RandomSource, Result,
};

pub use crate::characters::{Character, CharacterKind, Knight, KnightKind, Witch, WitchKind};

pub use crate::roster::{Allocation, RatioAllocator, Roster};

pub use crate::navigation::CircleNavigator;

pub use crate::combat::{CombatOutcome, CombatResolver};

pub use crate::chronicle::{Chronicle, ChronicleEntry};

pub use crate::engine::{Game, GamePhase};
