//! Replay protection for log entries.

/// High-water mark over entry indices.
///
/// Log sources re-deliver earlier entries whenever the client re-renders,
/// so every entry carries a monotonically increasing index and the cursor
/// admits each index at most once. A skipped index is never revisited;
/// accepting past a gap moves the mark beyond it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogCursor {
    next_index: u64,
}

impl LogCursor {
    /// A cursor that will accept index zero first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The lowest index the cursor would still accept.
    #[must_use]
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Admits `index` if it has not been seen, advancing the mark past it.
    pub fn accept(&mut self, index: u64) -> bool {
        if index < self.next_index {
            return false;
        }
        self.next_index = index.saturating_add(1);
        true
    }

    /// Rewinds to the initial state.
    pub fn reset(&mut self) {
        self.next_index = 0;
    }
}
