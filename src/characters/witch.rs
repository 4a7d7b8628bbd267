//! Witches: fragile, hit for twice the dice value.

use super::character::{inflict, Character, CharacterKind};

/// Starting energy of every witch.
pub const WITCH_ENERGY: i64 = 12;

/// A witch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witch {
    name: String,
    energy: i64,
}

impl Witch {
    /// Create the `number`-th witch at full energy.
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self {
            name: format!("Witch {}", number),
            energy: WITCH_ENERGY,
        }
    }
}

impl Character for Witch {
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
        inflict(target, 2 * i64::from(dice))
    }
}

/// Allocates [`Witch`]es.
#[derive(Clone, Copy, Debug, Default)]
pub struct WitchKind;

impl CharacterKind for WitchKind {
    fn name(&self) -> &str {
        "Witch"
    }

    fn spawn(&self, number: u32) -> Box<dyn Character> {
        Box::new(Witch::new(number))
    }
}
