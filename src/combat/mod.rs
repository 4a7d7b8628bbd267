//! Combat resolution.

pub mod resolver;

pub use resolver::{CombatOutcome, CombatResolver};
