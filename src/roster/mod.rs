//! Roster construction and storage.
//!
//! - `RatioAllocator`: decides which kind goes into each circle position
//! - `Roster`: the fixed-size, position-stable sequence of characters

pub mod allocator;
pub mod roster;

pub use allocator::{Allocation, RatioAllocator};
pub use roster::Roster;
