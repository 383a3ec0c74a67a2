//! The tracker facade tying cursor, classifier, and engine together.

use tallytable_parser::{EventKind, RawEntry, classify};

use crate::apply::apply;
use crate::bank::BankState;
use crate::cursor::LogCursor;
use crate::ledger::LedgerBook;
use crate::snapshot::Snapshot;

/// The verdict on one delivered entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The entry's index was already consumed; nothing happened.
    Stale,
    /// The entry was admitted, classified, and applied.
    Processed {
        /// What the entry classified to.
        kind: EventKind,
        /// Whether applying it changed any ledger or bank state.
        mutated: bool,
    },
}

/// Tracks one game: admission, classification, and application in order.
///
/// Entries are fed one at a time through [`Tracker::admit`]; the book and
/// bank are readable between calls and a [`Snapshot`] can be captured at
/// any point.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    book: LedgerBook,
    bank: BankState,
    cursor: LogCursor,
}

impl Tracker {
    /// An empty tracker with a full bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one `(index, entry)` pair through the pipeline.
    ///
    /// Stale indices are dropped before classification, so redelivered
    /// entries never double-apply.
    pub fn admit(&mut self, index: u64, entry: &RawEntry) -> Admission {
        if !self.cursor.accept(index) {
            return Admission::Stale;
        }
        let event = classify(entry);
        let mutated = apply(&event, &mut self.book, &mut self.bank);
        Admission::Processed {
            kind: event.kind,
            mutated,
        }
    }

    /// Captures the current state for rendering or persistence.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.book, &self.bank)
    }

    /// Clears every ledger and restores the bank and cursor.
    pub fn reset(&mut self) {
        self.book.clear();
        self.bank.reset();
        self.cursor.reset();
    }

    /// The tracked player ledgers.
    #[must_use]
    pub fn book(&self) -> &LedgerBook {
        &self.book
    }

    /// The development piece bank.
    #[must_use]
    pub fn bank(&self) -> &BankState {
        &self.bank
    }

    /// The admission cursor.
    #[must_use]
    pub fn cursor(&self) -> &LogCursor {
        &self.cursor
    }
}
