//! Neighbor lookup over the alive positions of the circle.

use crate::core::{Direction, GameError, Position, RandomSource, Result};

/// Finds the next alive position in a given direction.
///
/// The alive set is passed in fresh on each call, in circle order, so the
/// navigator holds no state of its own.
///
/// ```
/// use circle_battle::core::{Direction, GameRng, Position};
/// use circle_battle::navigation::CircleNavigator;
///
/// let alive = [Position::new(0), Position::new(1), Position::new(3)];
/// let mut rng = GameRng::new(0);
///
/// // Position 2 is dead, so clockwise from 1 lands on 3
/// let next = CircleNavigator::neighbor(&alive, Position::new(1), Direction::Clockwise, &mut rng);
/// assert_eq!(next.unwrap(), Position::new(3));
/// ```
pub struct CircleNavigator;

impl CircleNavigator {
    /// Neighbor of `current` among `alive` in `direction`.
    ///
    /// `alive` must be sorted by position. If `current` is not itself alive,
    /// directional steps start from where it would sit in the circle.
    ///
    /// ## Errors
    ///
    /// - `InvalidState` if `alive` is empty
    /// - `InvalidState` for `Direction::Random` with fewer than two alive
    pub fn neighbor<R: RandomSource + ?Sized>(
        alive: &[Position],
        current: Position,
        direction: Direction,
        rng: &mut R,
    ) -> Result<Position> {
        if alive.is_empty() {
            return Err(GameError::invalid_state("no alive positions to navigate"));
        }

        let len = alive.len();
        let found = alive.binary_search(&current);

        let index = match direction {
            Direction::Clockwise => match found {
                Ok(i) => (i + 1) % len,
                Err(i) => i % len,
            },
            Direction::CounterClockwise => match found {
                Ok(i) | Err(i) => (i + len - 1) % len,
            },
            Direction::Random => {
                if len < 2 {
                    return Err(GameError::invalid_state(format!(
                        "random neighbor needs at least two alive positions, have {}",
                        len
                    )));
                }
                match found {
                    // Skip over current so every other position is equally likely
                    Ok(i) => {
                        let k = rng.pick(len - 1);
                        if k >= i {
                            k + 1
                        } else {
                            k
                        }
                    }
                    Err(_) => rng.pick(len),
                }
            }
        };

        Ok(alive[index])
    }
}
