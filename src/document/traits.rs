//! Traits for the document decoder boundary.

use super::types::Sheet;
use crate::error::Result;
use std::io::{Read, Seek};

/// Combined Read + Seek bound for decoder input streams.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// Decoded access to the sheets of one document.
///
/// Implementations own whatever decoded state they need and hand sheets out
/// as owned snapshots.
pub trait DocumentReader {
    /// Get the number of sheets in the document.
    fn sheet_count(&self) -> usize;

    /// Get the sheet at a zero-based index.
    ///
    /// Takes `&mut self` so implementations may decode lazily from the
    /// underlying stream.
    fn sheet_at(&mut self, index: usize) -> Result<Sheet>;
}

/// Opens a seekable byte stream as a decoded document.
pub trait DocumentDecoder {
    /// Decode a document from its raw byte stream.
    fn open(&self, input: Box<dyn ReadSeek>) -> Result<Box<dyn DocumentReader>>;
}
