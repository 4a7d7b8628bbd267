//! Walking the circle.
//!
//! `CircleNavigator` answers "who is next" for both turn passing and
//! attack targeting, skipping dead slots.

pub mod navigator;

pub use navigator::CircleNavigator;
