//! Walking directions around the circle.

use serde::{Deserialize, Serialize};

/// Direction used both for passing the turn and for picking attack targets.
///
/// The two uses are configured independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Next alive position with a higher index, wrapping past the end (+1).
    Clockwise,
    /// Next alive position with a lower index, wrapping past the start (-1).
    #[default]
    CounterClockwise,
    /// Any other alive position, chosen uniformly (0).
    Random,
}

impl Direction {
    /// Normalize a signed offset: any positive value is clockwise, any
    /// negative value counter-clockwise, zero is random.
    #[must_use]
    pub const fn from_offset(offset: i64) -> Self {
        if offset > 0 {
            Self::Clockwise
        } else if offset < 0 {
            Self::CounterClockwise
        } else {
            Self::Random
        }
    }

    /// The signed step this direction represents (+1, -1 or 0).
    #[must_use]
    pub const fn offset(self) -> i64 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
            Self::Random => 0,
        }
    }
}

impl From<i64> for Direction {
    fn from(offset: i64) -> Self {
        Self::from_offset(offset)
    }
}

impl From<i32> for Direction {
    fn from(offset: i32) -> Self {
        Self::from_offset(i64::from(offset))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clockwise => write!(f, "clockwise"),
            Self::CounterClockwise => write!(f, "counter-clockwise"),
            Self::Random => write!(f, "random"),
        }
    }
}
