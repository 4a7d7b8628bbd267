//! Character capabilities and the standard kinds.
//!
//! The engine only talks to characters through the [`Character`] trait and
//! builds them through [`CharacterKind`]. `Knight` and `Witch` are the two
//! kinds the base game ships with; callers can add their own.

pub mod character;
pub mod knight;
pub mod witch;

pub use character::{inflict, Character, CharacterKind};
pub use knight::{Knight, KnightKind};
pub use witch::{Witch, WitchKind};
