//! Executes one attack between two roster positions.
//!
//! The resolver does not know any damage formula. It hands the dice value
//! to the attacker's `apply_damage` exactly once and then reads whether the
//! target survived.

use crate::core::{GameError, Position, Result};
use crate::roster::Roster;

/// Result of a single attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatOutcome {
    /// Damage reported by the attacker.
    pub damage: i64,
    /// Target was alive before the attack and is not after it.
    pub target_died: bool,
    /// Target energy after the attack.
    pub target_energy: i64,
}

/// Resolves attacks on a roster.
pub struct CombatResolver;

impl CombatResolver {
    /// Let `attacker` hit `target` with `dice`.
    ///
    /// Fails with `InvalidState` if the positions are equal, out of range,
    /// or either character is already dead.
    pub fn resolve(
        roster: &mut Roster,
        attacker: Position,
        target: Position,
        dice: u8,
    ) -> Result<CombatOutcome> {
        let (attacker_char, target_char) = roster
            .attacker_and_target(attacker, target)
            .ok_or_else(|| {
                GameError::invalid_state(format!(
                    "{} cannot attack {}",
                    attacker, target
                ))
            })?;

        if !attacker_char.is_alive() || !target_char.is_alive() {
            return Err(GameError::invalid_state(format!(
                "{} cannot attack {}: both must be alive",
                attacker_char.name(),
                target_char.name()
            )));
        }

        let damage = attacker_char.apply_damage(target_char, dice);

        Ok(CombatOutcome {
            damage,
            target_died: !target_char.is_alive(),
            target_energy: target_char.energy(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::{Character, Knight, Witch};

    fn roster() -> Roster {
        let characters: Vec<Box<dyn Character>> = vec![
            Box::new(Knight::new(1)),
            Box::new(Witch::new(1)),
            Box::new(Knight::new(2)),
        ];
        Roster::from_characters(characters).unwrap()
    }

    #[test]
    fn test_resolve_damages_target() {
        let mut roster = roster();

        let outcome = CombatResolver::resolve(&mut roster, Position::new(0), Position::new(2), 4).unwrap();

        assert_eq!(outcome.damage, 4);
        assert!(!outcome.target_died);
        assert_eq!(outcome.target_energy, 16);
        assert_eq!(roster[Position::new(2)].energy(), 16);
        assert_eq!(roster[Position::new(0)].energy(), 20);
    }

    #[test]
    fn test_resolve_detects_death() {
        let mut roster = roster();

        // Witch (12 energy) takes 6 + 6 from a knight
        let first = CombatResolver::resolve(&mut roster, Position::new(2), Position::new(1), 6).unwrap();
        assert!(!first.target_died);
        let second = CombatResolver::resolve(&mut roster, Position::new(2), Position::new(1), 6).unwrap();
        assert!(second.target_died);
        assert_eq!(second.target_energy, 0);
    }

    #[test]
    fn test_resolve_rejects_dead_target() {
        let mut roster = roster();
        CombatResolver::resolve(&mut roster, Position::new(0), Position::new(1), 6).unwrap();
        CombatResolver::resolve(&mut roster, Position::new(0), Position::new(1), 6).unwrap();

        let again = CombatResolver::resolve(&mut roster, Position::new(0), Position::new(1), 1);
        assert!(matches!(again, Err(GameError::InvalidState(_))));
    }

    #[test]
    fn test_resolve_rejects_self_attack() {
        let mut roster = roster();
        let result = CombatResolver::resolve(&mut roster, Position::new(1), Position::new(1), 3);
        assert!(matches!(result, Err(GameError::InvalidState(_))));
    }
}
