//! Knights: sturdy, hit for the dice value.

use super::character::{inflict, Character, CharacterKind};

/// Starting energy of every knight.
pub const KNIGHT_ENERGY: i64 = 20;

/// A knight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Knight {
    name: String,
    energy: i64,
}

impl Knight {
    /// Create the `number`-th knight at full energy.
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self {
            name: format!("Knight {}", number),
            energy: KNIGHT_ENERGY,
        }
    }
}

impl Character for Knight {
    fn name(&self) -> &str {
        &self.name
    }

    fn energy(&self) -> i64 {
        self.energy
    }

    fn set_energy(&mut self, energy: i64) {
        self.energy = energy;
    }

    fn apply_damage(&self, target: &mut dyn Character, dice: u8) -> i64 {
        inflict(target, i64::from(dice))
    }
}

/// Allocates [`Knight`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnightKind;

impl CharacterKind for KnightKind {
    fn name(&self) -> &str {
        "Knight"
    }

    fn spawn(&self, number: u32) -> Box<dyn Character> {
        Box::new(Knight::new(number))
    }
}
