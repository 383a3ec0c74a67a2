//! Integration tests for the tallytable_engine crate.
//!
//! Tests for ledger application, hidden-card inference, and replay admission.

mod inference_tests;
mod tracker_tests;
