//! Turn-by-turn record of a game.
//!
//! - `ChronicleEntry`: immutable record of one turn, including narrative lines
//! - `Chronicle`: append-only log, one entry per completed turn

pub mod entry;
pub mod recorder;

pub use entry::{ChronicleEntry, NarrativeLines};
pub use recorder::Chronicle;
