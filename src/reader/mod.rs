//! Sequential row reading over multi-sheet documents.
//!
//! This module turns a decoded document into a lazily-produced, ordered
//! sequence of typed records, the shape batch pipelines pull from one item
//! at a time:
//!
//! - [`Resource`] supplies the input bytes and answers readiness checks
//!   before anything is decoded.
//! - [`RowSet`] is the forward-only view over one sheet's rows; a
//!   [`RowSetFactory`] builds a fresh one per sheet.
//! - [`RowMapper`] converts each positioned row into a caller-defined
//!   record.
//! - [`RowReader`] composes the three behind an open/read/close lifecycle,
//!   crossing sheet boundaries transparently and attaching sheet/row
//!   coordinates to every mapping failure.

// Submodule declarations
mod cursor;
pub mod mapper;
pub mod resource;
pub mod row_reader;
pub mod rowset;

// Re-exports
pub use mapper::{PassThroughMapper, RowMapper};
pub use resource::{BytesResource, FileResource, Resource};
pub use row_reader::RowReader;
pub use rowset::{DefaultRowSet, DefaultRowSetFactory, RowSet, RowSetFactory};

#[cfg(test)]
mod tests;
