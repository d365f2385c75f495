//! Unified error types for the rowmill library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! distinguishes resource readiness problems, decode failures, and row-level
//! mapping failures with full positional context.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{BoxedError, Error, Result, RowParseError};
