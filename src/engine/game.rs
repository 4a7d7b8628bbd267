//! The battle state machine.
//!
//! ## Lifecycle
//!
//! `Setup` → `InProgress` → `Finished`
//!
//! The roster is built during `Setup`. Construction ends in `InProgress`,
//! or directly in `Finished` if only one character is alive. Each call to
//! [`Game::next_move`] plays one turn:
//!
//! 1. The active character picks a target in the attack direction
//! 2. A die is rolled
//! 3. The attacker's damage formula is applied once
//! 4. The turn is recorded in the chronicle
//! 5. The turn passes in the turn direction, skipping anyone who just died

use serde::{Deserialize, Serialize};

use crate::characters::Character;
use crate::chronicle::{Chronicle, ChronicleEntry};
use crate::combat::CombatResolver;
use crate::core::{Direction, GameConfig, GameError, GameRng, Position, RandomSource, Result};
use crate::navigation::CircleNavigator;
use crate::roster::Roster;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Roster just built, no turn evaluated yet.
    Setup,
    /// At least two characters alive.
    InProgress,
    /// Exactly one character alive. Terminal.
    Finished,
}

/// A battle among a fixed circle of characters.
///
/// Owns its roster, chronicle and random source. Callers only get
/// read-only views.
#[derive(Debug)]
pub struct Game<R = GameRng> {
    character_number: usize,
    turn_direction: Direction,
    attack_direction: Direction,
    roster: Roster,
    active: Position,
    chronicle: Chronicle,
    phase: GamePhase,
    rng: R,
}

impl Game<GameRng> {
    /// Create a game driven by a seeded [`GameRng`].
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Validate `config`, build the roster and hand the first turn to the
    /// lowest alive position.
    pub fn new(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let roster = Roster::build(&config)?;
        Self::from_roster(roster, config.turn_direction, config.attack_direction, rng)
    }

    /// Create a game over an already-built roster.
    pub fn from_roster(
        roster: Roster,
        turn_direction: Direction,
        attack_direction: Direction,
        rng: R,
    ) -> Result<Self> {
        let active = roster
            .alive_positions()
            .first()
            .copied()
            .ok_or_else(|| GameError::configuration("no character in the roster is alive"))?;

        let mut game = Self {
            character_number: roster.len(),
            turn_direction,
            attack_direction,
            roster,
            active,
            chronicle: Chronicle::new(),
            phase: GamePhase::Setup,
            rng,
        };

        tracing::debug!(
            characters = game.character_number,
            turn = %turn_direction,
            attack = %attack_direction,
            "game set up"
        );

        game.update_phase();
        Ok(game)
    }

    // === Queries ===

    /// True iff exactly one character is alive.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.roster.alive_count() == 1
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The sole survivor.
    ///
    /// Fails with `InvalidState` until the game is finished.
    pub fn winner(&self) -> Result<&dyn Character> {
        if !self.is_finished() {
            return Err(GameError::invalid_state("the game needs to be played first"));
        }
        self.roster
            .alive_positions()
            .last()
            .map(|&position| &self.roster[position])
            .ok_or_else(|| GameError::invalid_state("no character is alive"))
    }

    /// Character whose turn it is.
    #[must_use]
    pub fn current_acting_character(&self) -> &dyn Character {
        &self.roster[self.active]
    }

    /// Position whose turn it is.
    #[must_use]
    pub fn active_position(&self) -> Position {
        self.active
    }

    /// All characters in circle order, dead ones included.
    #[must_use]
    pub fn characters(&self) -> &Roster {
        &self.roster
    }

    /// Alive positions in circle order.
    #[must_use]
    pub fn alive_positions(&self) -> Vec<Position> {
        self.roster.alive_positions()
    }

    /// Turn-by-turn record so far.
    #[must_use]
    pub fn chronicles(&self) -> &Chronicle {
        &self.chronicle
    }

    /// Number of turns played.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.chronicle.len()
    }

    /// Number of characters the game started with.
    #[must_use]
    pub fn character_number(&self) -> usize {
        self.character_number
    }

    /// Direction the turn passes in.
    #[must_use]
    pub fn turn_direction(&self) -> Direction {
        self.turn_direction
    }

    /// Direction attacks are aimed in.
    #[must_use]
    pub fn attack_direction(&self) -> Direction {
        self.attack_direction
    }

    // === Play ===

    /// Play one turn and return its chronicle entry.
    ///
    /// Fails with `InvalidState` once the game is finished.
    pub fn next_move(&mut self) -> Result<ChronicleEntry> {
        if self.is_finished() {
            return Err(GameError::invalid_state("the game is already finished"));
        }

        let attacker = self.active;
        let alive = self.roster.alive_positions();
        let target =
            CircleNavigator::neighbor(&alive, attacker, self.attack_direction, &mut self.rng)?;

        let dice = self.rng.roll_die();
        let outcome = CombatResolver::resolve(&mut self.roster, attacker, target, dice)?;

        let turn = u32::try_from(self.chronicle.len() + 1).unwrap_or(u32::MAX);
        let entry = ChronicleEntry::new(
            turn,
            attacker,
            self.roster[attacker].name(),
            dice,
            target,
            self.roster[target].name(),
            outcome,
        );
        self.chronicle.record(entry.clone());

        self.update_phase();
        if self.phase != GamePhase::Finished {
            let alive = self.roster.alive_positions();
            self.active =
                CircleNavigator::neighbor(&alive, attacker, self.turn_direction, &mut self.rng)?;
        }

        Ok(entry)
    }

    /// Play turns until one character is left and return it.
    ///
    /// Returns the winner immediately if the game is already finished.
    pub fn play(&mut self) -> Result<&dyn Character> {
        while !self.is_finished() {
            self.next_move()?;
        }
        self.winner()
    }

    fn update_phase(&mut self) {
        let next = if self.is_finished() {
            GamePhase::Finished
        } else {
            GamePhase::InProgress
        };

        if next != self.phase {
            tracing::debug!(from = ?self.phase, to = ?next, "phase change");
            self.phase = next;
            if let (GamePhase::Finished, Some(&position)) =
                (next, self.roster.alive_positions().first())
            {
                let winner = &self.roster[position];
                tracing::info!(
                    turns = self.chronicle.len(),
                    "{} wins with {} energy left",
                    winner.name(),
                    winner.energy()
                );
            }
        }
    }
}
