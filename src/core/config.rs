//! Game configuration.
//!
//! A game is configured with:
//! - the number of characters in the circle
//! - an ordered list of character kinds with their desired percentage
//! - the turn and attack directions
//!
//! Kind order is significant: when two kinds are equally far below their
//! desired share during allocation, the one listed first wins.

use rustc_hash::FxHashSet;

use super::direction::Direction;
use super::error::{GameError, Result};
use crate::characters::{CharacterKind, KnightKind, WitchKind};

/// A character kind with its desired share of the roster.
///
/// The percentage can only enter through `new`, which clamps it.
#[derive(Debug)]
pub struct KindShare {
    kind: Box<dyn CharacterKind>,
    percentage: f64,
}

impl KindShare {
    /// Create a share, clamping the percentage into `[0, 100]`.
    ///
    /// Non-finite percentages are treated as zero.
    pub fn new(kind: Box<dyn CharacterKind>, percentage: f64) -> Self {
        let clamped = if percentage.is_finite() {
            percentage.clamp(0.0, 100.0)
        } else {
            0.0
        };
        if clamped != percentage {
            tracing::warn!(
                "{} percentage {} adjusted to {}",
                kind.name(),
                percentage,
                clamped
            );
        }
        Self {
            kind,
            percentage: clamped,
        }
    }

    /// The kind to allocate.
    #[must_use]
    pub fn kind(&self) -> &dyn CharacterKind {
        &*self.kind
    }

    /// Desired percentage, always in `[0, 100]`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Desired share as a fraction (percentage / 100).
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.percentage / 100.0
    }
}

/// Complete game configuration.
#[derive(Debug)]
pub struct GameConfig {
    /// Number of characters in the circle (must be > 1).
    pub character_number: usize,

    /// Kinds in tie-break order.
    pub kinds: Vec<KindShare>,

    /// How the turn passes after each attack.
    pub turn_direction: Direction,

    /// Where the acting character aims.
    pub attack_direction: Direction,
}

impl GameConfig {
    /// Create a configuration with no kinds and counter-clockwise play.
    pub fn new(character_number: usize) -> Self {
        Self {
            character_number,
            kinds: Vec::new(),
            turn_direction: Direction::default(),
            attack_direction: Direction::default(),
        }
    }

    /// The base game: witches make up `witches_percentage`, knights the rest.
    ///
    /// Witches are listed first, so they win allocation ties.
    pub fn knights_and_witches(character_number: usize, witches_percentage: f64) -> Self {
        let witches = KindShare::new(Box::new(WitchKind), witches_percentage);
        let knights = KindShare::new(Box::new(KnightKind), 100.0 - witches.percentage);

        let mut config = Self::new(character_number);
        config.kinds.push(witches);
        config.kinds.push(knights);
        config
    }

    /// Append a kind with its desired percentage.
    #[must_use]
    pub fn with_kind(mut self, kind: impl CharacterKind + 'static, percentage: f64) -> Self {
        self.kinds.push(KindShare::new(Box::new(kind), percentage));
        self
    }

    /// Set the turn direction. Accepts a `Direction` or a signed offset.
    #[must_use]
    pub fn with_turn_direction(mut self, direction: impl Into<Direction>) -> Self {
        self.turn_direction = direction.into();
        self
    }

    /// Set the attack direction. Accepts a `Direction` or a signed offset.
    #[must_use]
    pub fn with_attack_direction(mut self, direction: impl Into<Direction>) -> Self {
        self.attack_direction = direction.into();
        self
    }

    /// Kinds with a nonzero share, in configured order.
    pub fn active_kinds(&self) -> impl Iterator<Item = &KindShare> {
        self.kinds.iter().filter(|share| share.percentage > 0.0)
    }

    /// Check the configuration before building a game.
    pub fn validate(&self) -> Result<()> {
        if self.character_number <= 1 {
            return Err(GameError::configuration(format!(
                "this game is not fun - character_number must be greater than 1, got {}",
                self.character_number
            )));
        }

        if u32::try_from(self.character_number).is_err() {
            return Err(GameError::configuration(format!(
                "character_number {} does not fit in a circle position",
                self.character_number
            )));
        }

        let mut seen = FxHashSet::default();
        for share in &self.kinds {
            if !seen.insert(share.kind.name()) {
                return Err(GameError::configuration(format!(
                    "kind {} is listed more than once",
                    share.kind.name()
                )));
            }
        }

        if self.active_kinds().next().is_none() {
            return Err(GameError::configuration(
                "every kind has a zero share - nothing to allocate",
            ));
        }

        Ok(())
    }
}
