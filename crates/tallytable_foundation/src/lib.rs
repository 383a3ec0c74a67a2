//! Core resource types, count arithmetic, and errors for Tallytable.
//!
//! This crate provides:
//! - [`Resource`] - The canonical resource kinds plus the unknown placeholder
//! - [`ResourceCounts`] - Per-player holdings with clamped arithmetic
//! - [`PieceKind`] - Development piece kinds recognized in played-card text
//! - [`Error`] - Shared error type for the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod counts;
pub mod error;
pub mod piece;
pub mod resource;

// Re-export main types for convenience
pub use counts::ResourceCounts;
pub use error::{Error, ErrorKind, Result, TranscriptError};
pub use piece::PieceKind;
pub use resource::Resource;
