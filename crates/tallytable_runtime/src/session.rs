//! Session state over one tracked game.

use std::fs;
use std::path::Path;

use tracing::debug;

use tallytable_engine::{Admission, Snapshot, Tracker};
use tallytable_foundation::{Error, ErrorKind, Result};

use crate::transcript::{ParsedLine, parse_line};

/// Counters from feeding a batch of transcript lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Entries admitted and classified.
    pub entries: usize,
    /// Entries whose application changed ledger or bank state.
    pub mutations: usize,
    /// Entries dropped as stale redeliveries.
    pub stale: usize,
}

/// A tracked game plus transcript bookkeeping.
///
/// The session assigns indices to lines that carry none, so a transcript
/// can be typed interactively without numbering every entry. An explicit
/// `N |` prefix pins the index and pushes the automatic counter past it.
pub struct Session {
    tracker: Tracker,
    auto_index: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session over an empty game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: Tracker::new(),
            auto_index: 0,
        }
    }

    /// Feeds one transcript line.
    ///
    /// Blank and comment lines produce `None`; entry lines produce the
    /// tracker's verdict.
    ///
    /// # Errors
    ///
    /// Returns a transcript error when the line does not parse.
    pub fn feed_line(&mut self, line: &str) -> Result<Option<Admission>> {
        match parse_line(line)? {
            ParsedLine::Blank | ParsedLine::Comment => Ok(None),
            ParsedLine::Entry { index, entry } => {
                let effective = index.unwrap_or(self.auto_index);
                let admission = self.tracker.admit(effective, &entry);
                self.auto_index = self.auto_index.max(effective.saturating_add(1));
                Ok(Some(admission))
            }
        }
    }

    /// Feeds every line of a transcript.
    ///
    /// # Errors
    ///
    /// Returns the first parse error, annotated with its 1-based line
    /// number. Lines before the failing one stay applied.
    pub fn feed_lines(&mut self, source: &str) -> Result<LoadStats> {
        let mut stats = LoadStats::default();
        for (number, line) in source.lines().enumerate() {
            match self.feed_line(line).map_err(|e| at_line(e, number + 1))? {
                Some(Admission::Processed { mutated, .. }) => {
                    stats.entries += 1;
                    if mutated {
                        stats.mutations += 1;
                    }
                }
                Some(Admission::Stale) => stats.stale += 1,
                None => {}
            }
        }
        debug!(
            entries = stats.entries,
            mutations = stats.mutations,
            stale = stats.stale,
            "fed transcript batch"
        );
        Ok(stats)
    }

    /// Reads and feeds a transcript file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file cannot be read, or the first
    /// parse error inside it.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadStats> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;
        self.feed_lines(&source)
    }

    /// Captures the current game state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.tracker.snapshot()
    }

    /// The current game state as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a snapshot error when serialization fails.
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.tracker.snapshot())
            .map_err(|e| Error::snapshot(e.to_string()))
    }

    /// Writes the current snapshot to a file as JSON.
    ///
    /// # Errors
    ///
    /// Returns a snapshot error when serialization fails or an I/O error
    /// when the file cannot be written.
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        let json = self.snapshot_json()?;
        fs::write(path, json)
            .map_err(|e| Error::io(format!("failed to write {}: {e}", path.display())))
    }

    /// Clears the game and the automatic index counter.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.auto_index = 0;
    }

    /// The underlying tracker, for read access between feeds.
    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}

/// Prefixes a transcript error's message with the line it came from.
fn at_line(error: Error, number: usize) -> Error {
    match error.kind {
        ErrorKind::Transcript(t) => {
            Error::transcript(format!("line {number}: {}", t.message), t.column)
        }
        other => Error::new(other),
    }
}
