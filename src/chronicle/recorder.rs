//! Append-only chronicle.

use im::Vector;

use super::entry::ChronicleEntry;

/// Ordered log of every completed turn.
///
/// Backed by a persistent vector, so handing out snapshots is O(1).
#[derive(Clone, Debug, Default)]
pub struct Chronicle {
    entries: Vector<ChronicleEntry>,
}

impl Chronicle {
    /// Create an empty chronicle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn record, logging its narrative.
    pub fn record(&mut self, entry: ChronicleEntry) {
        for line in &entry.lines {
            tracing::debug!(turn = entry.turn, "{}", line);
        }
        self.entries.push_back(entry);
    }

    /// All entries in turn order.
    #[must_use]
    pub fn entries(&self) -> &Vector<ChronicleEntry> {
        &self.entries
    }

    /// Iterate over entries in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &ChronicleEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&ChronicleEntry> {
        self.entries.back()
    }

    /// Number of recorded turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first turn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
