//! A single turn record.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::combat::CombatOutcome;
use crate::core::Position;

/// Narrative text for one turn. Always three lines.
pub type NarrativeLines = SmallVec<[String; 3]>;

/// What happened during one turn.
///
/// Entries are built once by the engine and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChronicleEntry {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// Position of the acting character.
    pub actor_position: Position,

    /// Name of the acting character.
    pub actor: String,

    /// Dice value for this turn, in `1..=6`.
    pub dice: u8,

    /// Position of the attacked character.
    pub target_position: Position,

    /// Name of the attacked character.
    pub target: String,

    /// Damage dealt.
    pub damage: i64,

    /// Whether the attack killed the target.
    pub target_died: bool,

    /// Target energy after the attack.
    pub target_energy: i64,

    /// Human-readable description of the turn.
    pub lines: NarrativeLines,
}

impl ChronicleEntry {
    /// Build an entry and its narrative from an attack outcome.
    #[must_use]
    pub fn new(
        turn: u32,
        actor_position: Position,
        actor: impl Into<String>,
        dice: u8,
        target_position: Position,
        target: impl Into<String>,
        outcome: CombatOutcome,
    ) -> Self {
        let actor = actor.into();
        let target = target.into();
        let lines = narrate(&actor, &target, &outcome);

        Self {
            turn,
            actor_position,
            actor,
            dice,
            target_position,
            target,
            damage: outcome.damage,
            target_died: outcome.target_died,
            target_energy: outcome.target_energy,
            lines,
        }
    }

    /// Narrative joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

fn narrate(actor: &str, target: &str, outcome: &CombatOutcome) -> NarrativeLines {
    let mut lines = NarrativeLines::new();
    lines.push(format!("{} is active", actor));
    lines.push(format!("{} attacks {} with {} damage", actor, target, outcome.damage));
    if outcome.target_died {
        lines.push(format!("{} is dead", target));
    } else {
        lines.push(format!("{} has {} energy left now", target, outcome.target_energy));
    }
    lines
}
