//! Integration tests for the tallytable_parser crate.
//!
//! Tests for the log entry classification pipeline:
//! - Raw entry span model and positional views
//! - Ordered rule table precedence
//! - Actor, victim, and icon delta extraction

mod entry_tests;
