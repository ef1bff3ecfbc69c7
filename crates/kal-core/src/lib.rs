//! # kal-core
//!
//! Error definitions and argument bounds for kalender-rs.
//!
//! This crate provides the pieces shared by every other crate in the
//! workspace: the error taxonomy, the `ensure!`-family argument-checking
//! macros, and the inclusive bounds those checks use.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Inclusive bounds for year, month, day and week arguments.
pub mod bounds;

/// Error types and the `ensure!` / `ensure_range!` / `ensure_post!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
