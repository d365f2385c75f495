//! Unified error types for the rowmill library.
//!
//! This module provides a unified error type that encompasses resource
//! readiness failures, document decoding failures, and per-row mapping
//! failures, presenting a consistent API to users.
use crate::document::CellValue;
use thiserror::Error;

/// Boxed error produced by caller-supplied collaborators such as row mappers.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for rowmill operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input resource does not exist
    #[error("input resource does not exist: {0}")]
    ResourceMissing(String),

    /// Input resource exists but cannot be read
    #[error("input resource is not readable: {0}")]
    ResourceUnreadable(String),

    /// Document decoder failed to open the document or extract a sheet
    #[error("decode error: {0}")]
    Decode(String),

    /// A sheet index past the end of the document was requested
    #[error("sheet index {index} out of range: document has {count} sheets")]
    SheetOutOfRange { index: usize, count: usize },

    /// Row mapping failed; carries the full row coordinates
    #[error(transparent)]
    RowParse(#[from] RowParseError),
}

/// Result type for rowmill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of the row-mapping step, pinned to the row it happened on.
///
/// Carries enough positional context (resource identity, sheet name, row
/// ordinal, raw cell contents) that a consumer can localize the bad row
/// without re-scanning the document. The original mapping failure is kept
/// as the error source.
#[derive(Error, Debug)]
#[error("failed to map row {row_index} of sheet '{sheet_name}' in {resource}: {source}")]
pub struct RowParseError {
    /// Description of the input resource the row came from.
    pub resource: String,
    /// Name of the sheet containing the row.
    pub sheet_name: String,
    /// Zero-based ordinal of the row within its sheet.
    pub row_index: usize,
    /// Raw cell contents of the offending row.
    pub row: Vec<CellValue>,
    /// The original mapping failure.
    #[source]
    pub source: BoxedError,
}
