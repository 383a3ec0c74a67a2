//! Log entry classification for Tallytable.
//!
//! This crate turns one raw log entry (ordered text, styled-name, and icon
//! spans) into exactly one typed [`Event`] the ledger engine can apply.
//!
//! # Architecture
//!
//! ```text
//! [Alice|#e27174] " gave " {wood} " and got " {wheat} " from " "Bob"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   RAW ENTRY     │  → ordered spans with positions
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RULE TABLE      │  → first matching phrase rule wins
//! │ (ordered)       │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EXTRACTION      │  → actor, color, victim, icon deltas
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EVENT           │  → Event { kind, actor, gained, lost, ... }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`entry`] - Raw entry span model and positional views
//! - [`event`] - Typed events and the closed kind enum
//! - [`classifier`] - The ordered rule table

pub mod classifier;
pub mod entry;
pub mod event;

// Re-export main types for convenience
pub use classifier::classify;
pub use entry::{Pos, RawEntry, Span};
pub use event::{Affected, Event, EventKind};
