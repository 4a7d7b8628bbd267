//! Circle positions.
//!
//! A `Position` is a fixed slot in the roster. It never changes once a
//! character is assigned to it, even after that character dies, so that
//! clockwise and counter-clockwise keep their meaning.

use serde::{Deserialize, Serialize};

/// Fixed index of a character in the circle (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u32);

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw roster index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every position of a circle with `count` slots.
    ///
    /// Counts beyond `u32::MAX` are capped there, since no roster can be
    /// larger.
    ///
    /// ```
    /// use circle_battle::core::Position;
    ///
    /// let positions: Vec<_> = Position::all(3).collect();
    /// assert_eq!(positions, vec![Position::new(0), Position::new(1), Position::new(2)]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = Position> {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        (0..count).map(Position)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
