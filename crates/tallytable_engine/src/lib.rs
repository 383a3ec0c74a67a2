//! Ledger engine for Tallytable.
//!
//! This crate provides:
//! - [`LedgerBook`] - Insertion-ordered player ledgers with lazy creation
//! - [`BankState`] - Shared development piece pools
//! - [`LogCursor`] - Monotonic admission guard against redelivery
//! - [`apply`] - Applies one classified event to ledgers and bank
//! - [`Tracker`] - The engine context: book + bank + cursor, no globals
//! - [`Snapshot`] - Cloned read views with a stable wire format

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod apply;
pub mod bank;
pub mod cursor;
pub mod infer;
pub mod ledger;
pub mod snapshot;
pub mod tracker;

// Re-export main types for convenience
pub use apply::apply;
pub use bank::BankState;
pub use cursor::LogCursor;
pub use infer::{StealOutcome, deduct_unknown_for_cost, distribute_unknown_steal};
pub use ledger::{LedgerBook, PlayerLedger};
pub use snapshot::Snapshot;
pub use tracker::{Admission, Tracker};
