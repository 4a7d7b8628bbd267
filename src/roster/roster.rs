//! The circle of characters.
//!
//! Positions are assigned once and never change. Dead characters stay in
//! their slot; aliveness is read from each character's energy.

use std::ops::Index;

use super::allocator::RatioAllocator;
use crate::characters::Character;
use crate::core::{GameConfig, GameError, Position, Result};

/// Fixed-size ordered sequence of characters, indexed by circle position.
#[derive(Debug)]
pub struct Roster {
    characters: Vec<Box<dyn Character>>,
}

impl Roster {
    /// Allocate and spawn the roster described by `config`.
    pub fn build(config: &GameConfig) -> Result<Self> {
        let fractions: Vec<f64> = config.kinds.iter().map(|share| share.fraction()).collect();
        let allocations = RatioAllocator::allocate(&fractions, config.character_number)?;

        let characters: Vec<_> = allocations
            .iter()
            .map(|allocation| config.kinds[allocation.kind].kind().spawn(allocation.number))
            .collect();

        Self::from_characters(characters)
    }

    /// Wrap already-built characters. The circle needs at least two slots.
    pub fn from_characters(characters: Vec<Box<dyn Character>>) -> Result<Self> {
        if characters.len() <= 1 {
            return Err(GameError::configuration(format!(
                "a roster needs more than one character, got {}",
                characters.len()
            )));
        }
        if u32::try_from(characters.len()).is_err() {
            return Err(GameError::configuration("roster too large"));
        }
        Ok(Self { characters })
    }

    /// Number of positions (alive or dead).
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Never true for a roster that passed construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Character at `position`, if the position exists.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&dyn Character> {
        self.characters.get(position.index()).map(|c| &**c)
    }

    /// Iterate over (Position, &Character) in circle order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &dyn Character)> {
        self.characters
            .iter()
            .enumerate()
            .map(|(i, c)| (Position(i as u32), &**c))
    }

    /// Positions whose occupant is alive, in circle order.
    #[must_use]
    pub fn alive_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, c)| c.is_alive())
            .map(|(p, _)| p)
            .collect()
    }

    /// Number of alive characters.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.characters.iter().filter(|c| c.is_alive()).count()
    }

    /// Borrow the attacker immutably and the target mutably.
    ///
    /// Returns `None` if the positions coincide or are out of range.
    pub(crate) fn attacker_and_target(
        &mut self,
        attacker: Position,
        target: Position,
    ) -> Option<(&dyn Character, &mut dyn Character)> {
        let (a, t) = (attacker.index(), target.index());
        if a == t || a >= self.characters.len() || t >= self.characters.len() {
            return None;
        }

        if a < t {
            let (left, right) = self.characters.split_at_mut(t);
            Some((&*left[a], &mut *right[0]))
        } else {
            let (left, right) = self.characters.split_at_mut(a);
            Some((&*right[0], &mut *left[t]))
        }
    }
}

impl Index<Position> for Roster {
    type Output = dyn Character;

    fn index(&self, position: Position) -> &Self::Output {
        &*self.characters[position.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::{Knight, KnightKind, Witch, WitchKind};

    #[test]
    fn test_build_base_game() {
        let config = GameConfig::knights_and_witches(4, 50.0);
        let roster = Roster::build(&config).unwrap();

        let names: Vec<_> = roster.iter().map(|(_, c)| c.name().to_string()).collect();
        assert_eq!(names, vec!["Witch 1", "Knight 1", "Witch 2", "Knight 2"]);
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.alive_count(), 4);
    }

    #[test]
    fn test_build_respects_kind_order() {
        let config = GameConfig::new(3)
            .with_kind(KnightKind, 50.0)
            .with_kind(WitchKind, 50.0);
        let roster = Roster::build(&config).unwrap();

        assert_eq!(roster[Position::new(0)].name(), "Knight 1");
        assert_eq!(roster[Position::new(1)].name(), "Witch 1");
        assert_eq!(roster[Position::new(2)].name(), "Knight 2");
    }

    #[test]
    fn test_build_all_zero_fails() {
        let zero = GameConfig::new(4)
            .with_kind(KnightKind, 0.0)
            .with_kind(WitchKind, 0.0);
        assert!(matches!(Roster::build(&zero), Err(GameError::Configuration(_))));
    }

    #[test]
    fn test_from_characters_needs_two() {
        let one: Vec<Box<dyn Character>> = vec![Box::new(Knight::new(1))];
        assert!(Roster::from_characters(one).is_err());
    }

    #[test]
    fn test_dead_slots_stay_in_place() {
        let characters: Vec<Box<dyn Character>> = vec![
            Box::new(Knight::new(1)),
            Box::new(Witch::new(1)),
            Box::new(Knight::new(2)),
        ];
        let mut roster = Roster::from_characters(characters).unwrap();

        let (attacker, target) = roster
            .attacker_and_target(Position::new(2), Position::new(1))
            .unwrap();
        attacker.apply_damage(target, 6);
        attacker.apply_damage(target, 6);

        assert_eq!(roster.len(), 3);
        assert!(!roster[Position::new(1)].is_alive());
        assert_eq!(roster.alive_positions(), vec![Position::new(0), Position::new(2)]);
        assert_eq!(roster.alive_count(), 2);
    }

    #[test]
    fn test_attacker_and_target_rejects_same_slot() {
        let config = GameConfig::knights_and_witches(3, 0.0);
        let mut roster = Roster::build(&config).unwrap();

        assert!(roster
            .attacker_and_target(Position::new(1), Position::new(1))
            .is_none());
        assert!(roster
            .attacker_and_target(Position::new(0), Position::new(9))
            .is_none());
        assert!(roster
            .attacker_and_target(Position::new(0), Position::new(2))
            .is_some());
    }
}
