//! The character capability.

use std::fmt;

/// A combatant occupying one circle position.
///
/// Implementors own their damage formula. The engine never inspects the
/// concrete type; it only reads `name`/`energy` and asks the attacker to
/// hurt the target.
///
/// ## Termination
///
/// A game only ends if `apply_damage` eventually brings some target's
/// energy to zero. The engine does not cap the number of turns.
pub trait Character: fmt::Debug {
    /// Display name, e.g. "Knight 3".
    fn name(&self) -> &str;

    /// Remaining energy. Never negative for the standard kinds.
    fn energy(&self) -> i64;

    /// Overwrite remaining energy. Used by attackers via [`inflict`].
    fn set_energy(&mut self, energy: i64);

    /// A character is alive while it has energy left.
    fn is_alive(&self) -> bool {
        self.energy() > 0
    }

    /// Hit `target` using this turn's dice value.
    ///
    /// Must subtract the damage from the target's energy and return the
    /// amount dealt. Called exactly once per turn.
    fn apply_damage(&self, target: &mut dyn Character, dice: u8) -> i64;
}

/// A kind of character that can be allocated into the roster.
pub trait CharacterKind: fmt::Debug {
    /// Kind name used for ratio bookkeeping ("Knight", "Witch").
    fn name(&self) -> &str;

    /// Create the `number`-th character of this kind (1-based).
    fn spawn(&self, number: u32) -> Box<dyn Character>;
}

/// Subtract `amount` from the target's energy, never going below zero.
///
/// Returns `amount` so damage formulas can end with `inflict(target, dmg)`.
pub fn inflict(target: &mut dyn Character, amount: i64) -> i64 {
    let remaining = target.energy().saturating_sub(amount).max(0);
    target.set_energy(remaining);
    amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Dummy {
        energy: i64,
    }

    impl Character for Dummy {
        fn name(&self) -> &str {
            "Dummy"
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

    #[test]
    fn test_inflict_clamps_at_zero() {
        let mut target = Dummy { energy: 4 };

        assert_eq!(inflict(&mut target, 3), 3);
        assert_eq!(target.energy(), 1);
        assert!(target.is_alive());

        assert_eq!(inflict(&mut target, 6), 6);
        assert_eq!(target.energy(), 0);
        assert!(!target.is_alive());
    }

    #[test]
    fn test_inflict_extreme_amounts_saturate() {
        let mut target = Dummy { energy: -3 };
        inflict(&mut target, i64::MAX);
        assert_eq!(target.energy(), 0);

        let mut target = Dummy { energy: 10 };
        inflict(&mut target, i64::MAX);
        assert_eq!(target.energy(), 0);
        assert!(!target.is_alive());
    }

    #[test]
    fn test_apply_damage_through_trait_object() {
        let attacker: Box<dyn Character> = Box::new(Dummy { energy: 10 });
        let mut target: Box<dyn Character> = Box::new(Dummy { energy: 10 });

        let dealt = attacker.apply_damage(target.as_mut(), 5);
        assert_eq!(dealt, 5);
        assert_eq!(target.energy(), 5);
        assert_eq!(attacker.energy(), 10);
    }
}
