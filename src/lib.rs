//! Tallytable - Game-log classifier and hidden-resource ledger tracker
//!
//! This crate re-exports all layers of the Tallytable system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tallytable_runtime    - Transcripts, sessions, REPL, CLI
//! Layer 2: tallytable_engine     - Ledgers, bank state, inference, apply
//! Layer 1: tallytable_parser     - Raw entries and event classification
//! Layer 0: tallytable_foundation - Resources, counts, pieces, errors
//! ```

pub use tallytable_engine as engine;
pub use tallytable_foundation as foundation;
pub use tallytable_parser as parser;
pub use tallytable_runtime as runtime;
