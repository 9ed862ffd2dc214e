//! # dd-core
//!
//! Error definitions shared by every crate in the datedim workspace.
//!
//! The date-dimension generator either produces a complete, internally
//! consistent day sequence or fails with one of the [`Error`] variants
//! defined here; there are no partial results.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
