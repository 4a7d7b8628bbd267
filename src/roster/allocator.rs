//! Proportional, interleaved kind allocation.
//!
//! For each position the allocator picks the kind that is furthest below
//! its desired share so far. This converges on the requested mix while
//! spreading kinds evenly around the circle instead of grouping them.
//!
//! ```
//! use circle_battle::roster::RatioAllocator;
//!
//! let order: Vec<_> = RatioAllocator::allocate(&[0.5, 0.5], 6)
//!     .unwrap()
//!     .iter()
//!     .map(|a| a.kind)
//!     .collect();
//! assert_eq!(order, vec![0, 1, 0, 1, 0, 1]);
//! ```

use smallvec::SmallVec;

use crate::core::{GameError, Result};

/// One roster slot's assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    /// Index of the kind in the caller's list.
    pub kind: usize,
    /// 1-based sequence number within that kind, used for naming.
    pub number: u32,
}

/// Builds the kind sequence for a roster.
pub struct RatioAllocator;

impl RatioAllocator {
    /// Allocate `count` slots according to `fractions`.
    ///
    /// `fractions[i]` is the desired share of kind `i`. Shares need not sum
    /// to one; they are scaled by their total. Kinds with a zero (or
    /// non-positive) share are skipped. Ties go to the kind with the lowest
    /// index.
    pub fn allocate(fractions: &[f64], count: usize) -> Result<Vec<Allocation>> {
        if count <= 1 {
            return Err(GameError::configuration(format!(
                "cannot allocate a circle of {} characters",
                count
            )));
        }

        let mut desired: SmallVec<[(usize, f64); 4]> = fractions
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, fraction)| fraction > 0.0)
            .collect();

        let total: f64 = desired.iter().map(|&(_, fraction)| fraction).sum();
        if desired.is_empty() || !total.is_finite() {
            return Err(GameError::configuration(
                "all kind ratios are zero - nothing to allocate",
            ));
        }

        // Current shares always sum to one, so targets must too
        for (_, fraction) in &mut desired {
            *fraction /= total;
        }

        let mut tally: SmallVec<[u32; 4]> = SmallVec::from_elem(0, desired.len());
        let mut allocations = Vec::with_capacity(count);

        for _ in 0..count {
            let slot = Self::most_pending(&desired, &tally);
            tally[slot] += 1;
            allocations.push(Allocation {
                kind: desired[slot].0,
                number: tally[slot],
            });
        }

        tracing::debug!(
            "allocated {} characters with tally {:?}",
            count,
            tally.as_slice()
        );

        Ok(allocations)
    }

    /// Slot whose desired share exceeds its current share the most.
    fn most_pending(desired: &[(usize, f64)], tally: &[u32]) -> usize {
        let total: u32 = tally.iter().sum();

        let mut best = 0;
        let mut best_pending = f64::NEG_INFINITY;

        for (slot, &(_, fraction)) in desired.iter().enumerate() {
            let current = if total > 0 {
                f64::from(tally[slot]) / f64::from(total)
            } else {
                0.0
            };
            let pending = fraction - current;
            // Strict comparison keeps the earliest kind on ties
            if pending > best_pending {
                best = slot;
                best_pending = pending;
            }
        }

        best
    }
}
