//! Transcript loading, sessions, REPL, and CLI for Tallytable.
//!
//! This crate provides:
//! - [`parse_line`] - Plain-text transcript parsing into raw entries
//! - [`Session`] - Feeds transcript lines through a tracker with automatic
//!   entry numbering
//! - [`Repl`] - Interactive read-eval-print loop over a session
//! - The `tallytable` binary with batch and interactive modes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod session;
pub mod transcript;

// Re-export main types for convenience
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::{LoadStats, Session};
pub use transcript::{ParsedLine, parse_line};
